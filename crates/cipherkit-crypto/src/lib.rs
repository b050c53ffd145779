#![doc = "Block cipher modes and OAEP-style padding for cipherkit."]
#![forbid(unsafe_code)]

// Core traits
pub mod provider;

// Random source
pub mod rand;

// Hash adapters
#[cfg(feature = "md5")]
pub mod md5;
#[cfg(feature = "sha2")]
pub mod sha2;

pub mod hash;

// Block primitives
#[cfg(feature = "aes")]
pub mod aes;
#[cfg(feature = "xor")]
pub mod xor;

// Modes of operation
#[cfg(feature = "modes")]
pub mod modes;

pub mod cipher {
    //! Whole-message cipher interface.
    pub use super::provider::BlockPrimitive;
    #[cfg(feature = "modes")]
    pub use super::modes::{BlockCipher, Cbc, CipherMode, Ctr, Ecb, Mode};
}

// Padding
#[cfg(feature = "oaep")]
pub mod oaep;

// Composition of padding and encryption
#[cfg(feature = "sealed")]
pub mod sealed;
