//! CBC (Cipher Block Chaining) mode of operation.
//!
//! Each plaintext block is XORed with the previous ciphertext block (the IV
//! for the first one) before encryption. Encryption is inherently sequential.
//! Decryption reads the previous ciphertext block straight from the input, so
//! it keeps no mutable chain state, but it also runs in block order.

use cipherkit_types::{CryptoError, ModeId};
use zeroize::Zeroizing;

use super::blocks::map_blocks_sequential;
use super::{checked_output, init_vector, xor_prefix, Mode};
use crate::provider::BlockPrimitive;

/// Cipher Block Chaining with a fixed initial vector.
///
/// The IV is only the starting point; every call starts its own chain from
/// it and the mode itself is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cbc {
    iv: Vec<u8>,
}

impl Cbc {
    /// CBC with an all-zero IV.
    pub fn new(block_size: usize) -> Result<Self, CryptoError> {
        Ok(Self {
            iv: init_vector(block_size, None)?,
        })
    }

    /// CBC with the given IV, which must be exactly `block_size` bytes.
    pub fn with_iv(block_size: usize, iv: &[u8]) -> Result<Self, CryptoError> {
        Ok(Self {
            iv: init_vector(block_size, Some(iv))?,
        })
    }

    pub fn iv(&self) -> &[u8] {
        &self.iv
    }
}

impl Mode for Cbc {
    fn id(&self) -> ModeId {
        ModeId::Cbc
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
        let mut chain = Zeroizing::new(self.iv.clone());
        map_blocks_sequential(message, self.block_size(), |block, _| {
            let mixed = Zeroizing::new(xor_prefix(&chain, block));
            let out = checked_output(block.len(), primitive.encrypt_block(key, &mixed)?)?;
            chain.clear();
            chain.extend_from_slice(&out);
            Ok(out)
        })
    }

    fn decrypt<P: BlockPrimitive + ?Sized>(
        &self,
        primitive: &P,
        key: &[u8],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let block_size = self.block_size();
        map_blocks_sequential(ciphertext, block_size, |block, offset| {
            let chain = if offset == 0 {
                &self.iv[..]
            } else {
                &ciphertext[offset - block_size..offset]
            };
            let plain = Zeroizing::new(checked_output(
                block.len(),
                primitive.decrypt_block(key, block)?,
            )?);
            Ok(xor_prefix(&plain, chain))
        })
    }
}
