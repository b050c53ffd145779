//! ECB (Electronic Codebook) mode of operation.
//!
//! **Security warning**: ECB mode does not provide semantic security. Equal
//! plaintext blocks encrypt to equal ciphertext blocks. Use CBC or CTR when
//! that matters.

use cipherkit_types::{CryptoError, ModeId};

use super::blocks::map_blocks_parallel;
use super::{checked_output, Mode};
use crate::provider::BlockPrimitive;

/// Every block goes through the primitive on its own, in parallel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ecb {
    block_size: usize,
}

impl Ecb {
    /// Create an ECB mode with `block_size`-byte blocks.
    pub fn new(block_size: usize) -> Result<Self, CryptoError> {
        if block_size == 0 {
            return Err(CryptoError::InvalidModeState);
        }
        Ok(Self { block_size })
    }
}

impl Mode for Ecb {
    fn id(&self) -> ModeId {
        ModeId::Ecb
    }

    fn block_size(&self) -> usize {
        self.block_size
    }

    fn encrypt<P: BlockPrimitive + ?Sized>(
        &self,
        primitive: &P,
        key: &[u8],
        message: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        map_blocks_parallel(message, self.block_size, |block, _| {
            checked_output(block.len(), primitive.encrypt_block(key, block)?)
        })
    }

    fn decrypt<P: BlockPrimitive + ?Sized>(
        &self,
        primitive: &P,
        key: &[u8],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        map_blocks_parallel(ciphertext, self.block_size, |block, _| {
            checked_output(block.len(), primitive.decrypt_block(key, block)?)
        })
    }
}
