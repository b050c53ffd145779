//! AES (Advanced Encryption Standard) block primitive.
//!
//! Adapts the `aes` crate to [`BlockPrimitive`]. AES-128, AES-192 and
//! AES-256 are selected by key length. Only full 16-byte blocks are accepted,
//! so messages fed through a mode must be a multiple of [`AES_BLOCK_SIZE`]
//! (see [`SealedCipher`](crate::sealed::SealedCipher) for one way to get there).

use ::aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use ::aes::{Aes128, Aes192, Aes256, Block};
use cipherkit_types::CryptoError;

use crate::provider::BlockPrimitive;

/// AES block size in bytes (128 bits).
pub const AES_BLOCK_SIZE: usize = 16;

/// AES keyed per call; the key schedule is rebuilt for every block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AesPrimitive;

macro_rules! aes_apply {
    ($cipher:ty, $key:expr, $block:expr, $encrypt:expr) => {{
        let cipher = <$cipher>::new_from_slice($key).map_err(|_| CryptoError::InvalidKey)?;
        if $encrypt {
            cipher.encrypt_block($block);
        } else {
            cipher.decrypt_block($block);
        }
    }};
}

impl AesPrimitive {
    pub fn new() -> Self {
        AesPrimitive
    }

    fn apply(key: &[u8], block: &[u8], encrypt: bool) -> Result<Vec<u8>, CryptoError> {
        if block.len() != AES_BLOCK_SIZE {
            return Err(CryptoError::InvalidArg);
        }
        let mut out = Block::clone_from_slice(block);
        match key.len() {
            16 => aes_apply!(Aes128, key, &mut out, encrypt),
            24 => aes_apply!(Aes192, key, &mut out, encrypt),
            32 => aes_apply!(Aes256, key, &mut out, encrypt),
            _ => return Err(CryptoError::InvalidKey),
        }
        Ok(out.to_vec())
    }
}

impl BlockPrimitive for AesPrimitive {
    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn encrypt_block(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Self::apply(key, block, true)
    }

    fn decrypt_block(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Self::apply(key, block, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_to_bytes(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    // FIPS 197 C.1: AES-128
    #[test]
    fn test_aes128_block() {
        let key = hex_to_bytes("000102030405060708090a0b0c0d0e0f");
        let pt = hex_to_bytes("00112233445566778899aabbccddeeff");
        let ct = AesPrimitive.encrypt_block(&key, &pt).unwrap();
        assert_eq!(hex(&ct), "69c4e0d86a7b0430d8cdb78070b4c55a");
        assert_eq!(AesPrimitive.decrypt_block(&key, &ct).unwrap(), pt);
    }

    // FIPS 197 C.3: AES-256
    #[test]
    fn test_aes256_block() {
        let key = hex_to_bytes("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f");
        let pt = hex_to_bytes("00112233445566778899aabbccddeeff");
        let ct = AesPrimitive.encrypt_block(&key, &pt).unwrap();
        assert_eq!(hex(&ct), "8ea2b7ca516745bfeafc49904b496089");
    }

    #[test]
    fn test_aes_rejects_bad_inputs() {
        let key = [0u8; 16];
        assert!(matches!(
            AesPrimitive.encrypt_block(&key, &[0u8; 15]),
            Err(CryptoError::InvalidArg)
        ));
        assert!(matches!(
            AesPrimitive.encrypt_block(&[0u8; 15], &[0u8; 16]),
            Err(CryptoError::InvalidKey)
        ));
    }
}
