//! Trait-based provider mechanism for cryptographic collaborators.
//!
//! These traits define the interfaces the mode and padding layers consume.
//! Concrete ciphers, hashes and random sources implement them; the layers
//! above are generic over them, so dispatch is static and monomorphized.

use cipherkit_types::CryptoError;

/// A keyed single-block transform (e.g., AES, or the XOR demo cipher).
///
/// Both operations must return a buffer of the same length as `block`. The
/// final block of a message may be shorter than [`block_size`](Self::block_size);
/// primitives that cannot handle a short block should return an error.
pub trait BlockPrimitive: Send + Sync {
    /// Block size in bytes.
    fn block_size(&self) -> usize;

    /// Encrypt a single block under `key`.
    fn encrypt_block(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Decrypt a single block under `key`.
    fn decrypt_block(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// A keyless, fixed-output hash function.
pub trait HashFunction: Send + Sync {
    /// The digest size in bytes.
    fn hash_size(&self) -> usize;

    /// One-shot hash computation. Pure and deterministic.
    fn hash(&self, data: &[u8]) -> Vec<u8>;
}

/// A source of unpredictable bytes.
pub trait RandomSource: Send {
    /// Fill `buf` entirely with random bytes.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), CryptoError>;

    /// Next random `u32`.
    fn next_u32(&mut self) -> Result<u32, CryptoError> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// Next random `u64`.
    fn next_u64(&mut self) -> Result<u64, CryptoError> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }
}

impl<P: BlockPrimitive + ?Sized> BlockPrimitive for &P {
    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn encrypt_block(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>, CryptoError> {
        (**self).encrypt_block(key, block)
    }

    fn decrypt_block(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>, CryptoError> {
        (**self).decrypt_block(key, block)
    }
}

impl<H: HashFunction + ?Sized> HashFunction for &H {
    fn hash_size(&self) -> usize {
        (**self).hash_size()
    }

    fn hash(&self, data: &[u8]) -> Vec<u8> {
        (**self).hash(data)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), CryptoError> {
        (**self).fill(buf)
    }
}
