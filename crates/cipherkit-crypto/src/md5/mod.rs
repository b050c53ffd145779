//! MD5 message digest adapter.
//!
//! MD5 produces a 128-bit (16-byte) hash value. It is defined in RFC 1321.
//!
//! **Security warning**: MD5 is cryptographically broken. It is offered here
//! as a cheap mixing function for the OAEP-style padding and for legacy
//! compatibility only.

use crate::provider::HashFunction;

/// MD5 output size in bytes.
pub const MD5_OUTPUT_SIZE: usize = 16;

/// MD5 as a [`HashFunction`], backed by the `md5` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Hash;

impl Md5Hash {
    pub fn new() -> Self {
        Md5Hash
    }

    /// One-shot: compute the MD5 digest of `data`.
    pub fn digest(data: &[u8]) -> [u8; MD5_OUTPUT_SIZE] {
        ::md5::compute(data).0
    }
}

impl HashFunction for Md5Hash {
    fn hash_size(&self) -> usize {
        MD5_OUTPUT_SIZE
    }

    fn hash(&self, data: &[u8]) -> Vec<u8> {
        Self::digest(data).to_vec()
    }
}
