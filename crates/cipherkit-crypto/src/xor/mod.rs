//! Repeating-key XOR block primitive.
//!
//! **Security warning**: this is a demonstration cipher with no security at
//! all. It is self-inverse (`decrypt_block == encrypt_block`), which makes it
//! handy for exercising the mode layer with hand-checkable outputs.

use cipherkit_types::CryptoError;

use crate::provider::BlockPrimitive;

/// XOR each block byte with `key[i % key.len()]`, `i` counted from the
/// start of the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorCipher {
    block_size: usize,
}

impl XorCipher {
    /// Create an XOR primitive reporting `block_size`-byte blocks.
    pub fn new(block_size: usize) -> Self {
        Self { block_size }
    }

    fn apply(key: &[u8], block: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if key.is_empty() {
            return Err(CryptoError::InvalidKey);
        }
        Ok(block
            .iter()
            .zip(key.iter().cycle())
            .map(|(b, k)| b ^ k)
            .collect())
    }
}

impl BlockPrimitive for XorCipher {
    fn block_size(&self) -> usize {
        self.block_size
    }

    fn encrypt_block(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Self::apply(key, block)
    }

    fn decrypt_block(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Self::apply(key, block)
    }
}
