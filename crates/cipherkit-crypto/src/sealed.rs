//! Pad-then-encrypt composition.
//!
//! The mode layer adds no padding, so a message that is not a whole number of
//! blocks ends in a short block. Primitives that only accept full blocks
//! (AES) cannot handle that. Running the message through OAEP first yields a
//! buffer whose length is a multiple of the hash size; when that is also a
//! multiple of the block size every block is full.

use cipherkit_types::CryptoError;
use tracing::debug;
use zeroize::Zeroizing;

use crate::modes::{BlockCipher, Mode};
use crate::oaep::Oaep;
use crate::provider::{BlockPrimitive, HashFunction, RandomSource};

/// OAEP padding followed by block encryption.
#[derive(Debug)]
pub struct SealedCipher<P, M, H, R> {
    cipher: BlockCipher<P, M>,
    oaep: Oaep<H, R>,
}

impl<P, M, H, R> SealedCipher<P, M, H, R>
where
    P: BlockPrimitive,
    M: Mode,
    H: HashFunction,
    R: RandomSource,
{
    /// Combine `cipher` and `oaep`.
    ///
    /// The hash size must be a non-zero multiple of the block size, otherwise
    /// padded buffers would end in a short block and this returns
    /// [`CryptoError::InvalidModeState`].
    pub fn new(cipher: BlockCipher<P, M>, oaep: Oaep<H, R>) -> Result<Self, CryptoError> {
        let h = oaep.hash_size();
        if h == 0 || h % cipher.block_size() != 0 {
            return Err(CryptoError::InvalidModeState);
        }
        Ok(Self { cipher, oaep })
    }

    pub fn cipher(&self) -> &BlockCipher<P, M> {
        &self.cipher
    }

    pub fn oaep(&self) -> &Oaep<H, R> {
        &self.oaep
    }

    /// Pad `data`, then encrypt the padded buffer.
    pub fn seal(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let padded = Zeroizing::new(self.oaep.pad(data)?);
        debug!(len = data.len(), sealed = padded.len(), "seal");
        self.cipher.encrypt(key, &padded)
    }

    /// Decrypt, then strip the padding.
    pub fn open(&self, key: &[u8], sealed: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if sealed.len() % self.cipher.block_size() != 0 {
            return Err(CryptoError::CorruptPadding);
        }
        let padded = Zeroizing::new(self.cipher.decrypt(key, sealed)?);
        self.oaep.unpad(&padded)
    }
}
