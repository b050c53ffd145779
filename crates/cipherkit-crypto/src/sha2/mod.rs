//! SHA-2 family adapters (FIPS 180-4), backed by the `sha2` crate.

use std::fmt;
use std::marker::PhantomData;

use ::sha2::Digest;

use crate::provider::HashFunction;

/// Any `sha2` digest as a [`HashFunction`].
pub struct DigestHash<D> {
    _digest: PhantomData<fn() -> D>,
}

/// SHA-256 (32-byte digest).
pub type Sha256Hash = DigestHash<::sha2::Sha256>;

/// SHA-512 (64-byte digest).
pub type Sha512Hash = DigestHash<::sha2::Sha512>;

impl<D: Digest> DigestHash<D> {
    pub fn new() -> Self {
        Self {
            _digest: PhantomData,
        }
    }
}

impl<D: Digest> Default for DigestHash<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for DigestHash<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for DigestHash<D> {}

impl<D> fmt::Debug for DigestHash<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DigestHash")
    }
}

impl<D: Digest> HashFunction for DigestHash<D> {
    fn hash_size(&self) -> usize {
        <D as Digest>::output_size()
    }

    fn hash(&self, data: &[u8]) -> Vec<u8> {
        D::digest(data).to_vec()
    }
}
