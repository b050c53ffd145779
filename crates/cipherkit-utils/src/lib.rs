#![forbid(unsafe_code)]
#![doc = "Utility functions for cipherkit: byte and text encodings."]

#[cfg(feature = "encoding")]
pub mod encoding;
