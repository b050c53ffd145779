//! CTR (Counter) mode of operation.
//!
//! The counter block for block `i` is the IV with its first four bytes XORed
//! with `i` as a little-endian `u32`. Encrypting the counter block yields the
//! keystream, which is XORed with the data. Encryption and decryption are the
//! same operation and only ever call the primitive's `encrypt_block`.
//!
//! The counter is 32 bits wide: a message of more than 2^32 blocks reuses
//! keystream. This is accepted and logged, not rejected, so that the byte
//! layout stays fixed.

use cipherkit_types::{CryptoError, ModeId};
use tracing::warn;
use zeroize::Zeroizing;

use super::blocks::map_blocks_parallel;
use super::{checked_output, init_vector, xor_prefix, Mode};
use crate::provider::BlockPrimitive;

/// Number of blocks a single message can hold before the counter wraps.
pub const CTR_MAX_BLOCKS: u64 = 1 << 32;

/// Counter mode with a fixed initial counter block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ctr {
    iv: Vec<u8>,
}

impl Ctr {
    /// CTR with an all-zero IV.
    pub fn new(block_size: usize) -> Result<Self, CryptoError> {
        Ok(Self {
            iv: init_vector(block_size, None)?,
        })
    }

    /// CTR with the given IV, which must be exactly `block_size` bytes.
    pub fn with_iv(block_size: usize, iv: &[u8]) -> Result<Self, CryptoError> {
        Ok(Self {
            iv: init_vector(block_size, Some(iv))?,
        })
    }

    pub fn iv(&self) -> &[u8] {
        &self.iv
    }

    /// The counter block for block `index`.
    ///
    /// Only the low 32 bits of `index` are used. With a block size below four
    /// bytes only that many counter bytes take part.
    pub fn counter_block(&self, index: u64) -> Vec<u8> {
        let mut counter = self.iv.clone();
        let ctr = (index as u32).to_le_bytes();
        for (c, k) in counter.iter_mut().zip(ctr.iter()) {
            *c ^= k;
        }
        counter
    }

    /// XOR `data` with the keystream. Applying it twice is the identity.
    pub fn apply_keystream<P: BlockPrimitive + ?Sized>(
        &self,
        primitive: &P,
        key: &[u8],
        data: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let block_size = self.block_size();
        let blocks = data.len().div_ceil(block_size) as u64;
        if blocks > CTR_MAX_BLOCKS {
            warn!(blocks, "ctr: counter wraps, keystream blocks will repeat");
        }
        map_blocks_parallel(data, block_size, |block, offset| {
            let counter = Zeroizing::new(self.counter_block((offset / block_size) as u64));
            let keystream = Zeroizing::new(checked_output(
                block_size,
                primitive.encrypt_block(key, &counter)?,
            )?);
            Ok(xor_prefix(block, &keystream))
        })
    }
}

impl Mode for Ctr {
    fn id(&self) -> ModeId {
        ModeId::Ctr
    }

    fn block_size(&self) -> usize {
        self.iv.len()
    }

    fn encrypt<P: BlockPrimitive + ?Sized>(
        &self,
        primitive: &P,
        key: &[u8],
        message: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        self.apply_keystream(primitive, key, message)
    }

    fn decrypt<P: BlockPrimitive + ?Sized>(
        &self,
        primitive: &P,
        key: &[u8],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        self.apply_keystream(primitive, key, ciphertext)
    }
}
