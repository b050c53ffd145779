//! Whole-message cipher: one block primitive bound to one mode.

use std::io::Read;

use cipherkit_types::CryptoError;
use cipherkit_utils::encoding::{FixedBytes, TextEncoding, Utf8};
use tracing::debug;
use zeroize::Zeroizing;

use super::Mode;
use crate::provider::BlockPrimitive;

/// A block primitive `P` driven by mode `M`.
///
/// Both are type parameters, so the mode calls straight into the concrete
/// primitive's `encrypt_block`/`decrypt_block` with no virtual dispatch. The
/// pairing is fixed at construction and the wrapper holds no other state.
///
/// # Examples
///
/// ```
/// use cipherkit_crypto::modes::{BlockCipher, Cbc};
/// use cipherkit_crypto::xor::XorCipher;
///
/// let cipher = BlockCipher::new(XorCipher::new(4), Cbc::new(4).unwrap()).unwrap();
/// let ct = cipher.encrypt(b"secret", b"0123").unwrap();
/// assert_eq!(cipher.decrypt(b"secret", &ct).unwrap(), b"0123");
/// ```
#[derive(Debug, Clone)]
pub struct BlockCipher<P, M> {
    primitive: P,
    mode: M,
}

impl<P: BlockPrimitive, M: Mode> BlockCipher<P, M> {
    /// Bind `primitive` to `mode`.
    ///
    /// Returns [`CryptoError::InvalidModeState`] if the block sizes disagree.
    pub fn new(primitive: P, mode: M) -> Result<Self, CryptoError> {
        if mode.block_size() == 0 || mode.block_size() != primitive.block_size() {
            return Err(CryptoError::InvalidModeState);
        }
        Ok(Self { primitive, mode })
    }

    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    pub fn mode(&self) -> &M {
        &self.mode
    }

    pub fn block_size(&self) -> usize {
        self.mode.block_size()
    }

    /// Encrypt a whole message.
    pub fn encrypt(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        debug!(mode = self.mode.name(), len = message.len(), "encrypt");
        self.mode.encrypt(&self.primitive, key, message)
    }

    /// Decrypt a whole message.
    pub fn decrypt(&self, key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        debug!(mode = self.mode.name(), len = ciphertext.len(), "decrypt");
        self.mode.decrypt(&self.primitive, key, ciphertext)
    }

    /// Encrypt a UTF-8 string.
    pub fn encrypt_str(&self, key: &[u8], message: &str) -> Result<Vec<u8>, CryptoError> {
        self.encrypt_str_with(&Utf8, key, message)
    }

    /// Encrypt a string serialized through `encoding`.
    pub fn encrypt_str_with<E: TextEncoding + ?Sized>(
        &self,
        encoding: &E,
        key: &[u8],
        message: &str,
    ) -> Result<Vec<u8>, CryptoError> {
        let bytes = Zeroizing::new(encoding.encode(message));
        self.encrypt(key, &bytes)
    }

    /// Decrypt into a UTF-8 string.
    pub fn decrypt_str(&self, key: &[u8], ciphertext: &[u8]) -> Result<String, CryptoError> {
        self.decrypt_str_with(&Utf8, key, ciphertext)
    }

    /// Decrypt and deserialize through `encoding`.
    pub fn decrypt_str_with<E: TextEncoding + ?Sized>(
        &self,
        encoding: &E,
        key: &[u8],
        ciphertext: &[u8],
    ) -> Result<String, CryptoError> {
        let bytes = Zeroizing::new(self.decrypt(key, ciphertext)?);
        encoding.decode(&bytes)
    }

    /// Encrypt a fixed-size value.
    pub fn encrypt_value<T: FixedBytes>(&self, key: &[u8], value: &T) -> Result<Vec<u8>, CryptoError> {
        let bytes = Zeroizing::new(value.to_bytes());
        self.encrypt(key, &bytes)
    }

    /// Decrypt a fixed-size value. A plaintext of the wrong size is
    /// [`CryptoError::InvalidEncoding`].
    pub fn decrypt_value<T: FixedBytes>(&self, key: &[u8], ciphertext: &[u8]) -> Result<T, CryptoError> {
        let bytes = Zeroizing::new(self.decrypt(key, ciphertext)?);
        T::from_bytes(&bytes)
    }

    /// Read `reader` to the end, then encrypt everything read.
    pub fn encrypt_reader<R: Read>(&self, key: &[u8], mut reader: R) -> Result<Vec<u8>, CryptoError> {
        let mut buf = Zeroizing::new(Vec::new());
        reader.read_to_end(&mut buf)?;
        self.encrypt(key, &buf)
    }

    /// Read `reader` to the end, then decrypt everything read.
    pub fn decrypt_reader<R: Read>(&self, key: &[u8], mut reader: R) -> Result<Vec<u8>, CryptoError> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        self.decrypt(key, &buf)
    }
}
