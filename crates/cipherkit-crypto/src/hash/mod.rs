//! Unified hash module.
//!
//! Re-exports the [`HashFunction`] capability and every hash adapter enabled
//! by Cargo features, and offers [`hash_for`] to pick one at run time.

pub use crate::provider::HashFunction;

#[cfg(feature = "md5")]
pub use crate::md5::Md5Hash;

#[cfg(feature = "sha2")]
pub use crate::sha2::{DigestHash, Sha256Hash, Sha512Hash};

use cipherkit_types::{CryptoError, HashAlgId};

/// Build a boxed hash function for `id`.
///
/// Returns [`CryptoError::InvalidArg`] when the adapter for `id` is not
/// compiled in.
pub fn hash_for(id: HashAlgId) -> Result<Box<dyn HashFunction>, CryptoError> {
    match id {
        #[cfg(feature = "md5")]
        HashAlgId::Md5 => Ok(Box::new(Md5Hash::new())),
        #[cfg(feature = "sha2")]
        HashAlgId::Sha256 => Ok(Box::new(Sha256Hash::new())),
        #[cfg(feature = "sha2")]
        HashAlgId::Sha512 => Ok(Box::new(Sha512Hash::new())),
        #[allow(unreachable_patterns)]
        _ => Err(CryptoError::InvalidArg),
    }
}

impl HashFunction for Box<dyn HashFunction> {
    fn hash_size(&self) -> usize {
        (**self).hash_size()
    }

    fn hash(&self, data: &[u8]) -> Vec<u8> {
        (**self).hash(data)
    }
}
