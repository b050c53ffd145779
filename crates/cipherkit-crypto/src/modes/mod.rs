//! Block cipher modes of operation.
//!
//! This module provides ECB, CBC and CTR. Each mode is written once against
//! the [`BlockPrimitive`] trait and works with any primitive; the
//! [`BlockCipher`] wrapper binds one primitive to one mode.
//!
//! No padding is added at this layer. A message whose length is not a
//! multiple of the block size ends in a short block, which every mode
//! processes by XORing over the shorter operand.

mod blocks;
mod block_cipher;
pub mod cbc;
pub mod ctr;
pub mod ecb;

pub use block_cipher::BlockCipher;
pub use cbc::Cbc;
pub use ctr::Ctr;
pub use ecb::Ecb;

use cipherkit_types::{CryptoError, ModeId};

use crate::provider::BlockPrimitive;

/// How a single-block primitive is applied across a whole message.
pub trait Mode: Send + Sync {
    /// The mode identifier.
    fn id(&self) -> ModeId;

    /// Bytes per block.
    fn block_size(&self) -> usize;

    /// Encrypt `message` with `primitive` under `key`.
    fn encrypt<P: BlockPrimitive + ?Sized>(
        &self,
        primitive: &P,
        key: &[u8],
        message: &[u8],
    ) -> Result<Vec<u8>, CryptoError>;

    /// Decrypt `ciphertext` with `primitive` under `key`.
    fn decrypt<P: BlockPrimitive + ?Sized>(
        &self,
        primitive: &P,
        key: &[u8],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CryptoError>;

    /// Short name used in log output.
    fn name(&self) -> &'static str {
        self.id().name()
    }
}

/// A mode chosen at run time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherMode {
    Ecb(Ecb),
    Cbc(Cbc),
    Ctr(Ctr),
}

impl CipherMode {
    /// Build the mode named by `id`.
    ///
    /// `iv` is only meaningful for CBC and CTR; `None` selects an all-zero IV.
    /// Passing an IV to ECB is rejected with [`CryptoError::InvalidArg`].
    pub fn from_id(id: ModeId, block_size: usize, iv: Option<&[u8]>) -> Result<Self, CryptoError> {
        Ok(match (id, iv) {
            (ModeId::Ecb, None) => CipherMode::Ecb(Ecb::new(block_size)?),
            (ModeId::Ecb, Some(_)) => return Err(CryptoError::InvalidArg),
            (ModeId::Cbc, None) => CipherMode::Cbc(Cbc::new(block_size)?),
            (ModeId::Cbc, Some(iv)) => CipherMode::Cbc(Cbc::with_iv(block_size, iv)?),
            (ModeId::Ctr, None) => CipherMode::Ctr(Ctr::new(block_size)?),
            (ModeId::Ctr, Some(iv)) => CipherMode::Ctr(Ctr::with_iv(block_size, iv)?),
        })
    }
}

impl From<Ecb> for CipherMode {
    fn from(mode: Ecb) -> Self {
        CipherMode::Ecb(mode)
    }
}

impl From<Cbc> for CipherMode {
    fn from(mode: Cbc) -> Self {
        CipherMode::Cbc(mode)
    }
}

impl From<Ctr> for CipherMode {
    fn from(mode: Ctr) -> Self {
        CipherMode::Ctr(mode)
    }
}

impl Mode for CipherMode {
    fn id(&self) -> ModeId {
        match self {
            CipherMode::Ecb(m) => m.id(),
            CipherMode::Cbc(m) => m.id(),
            CipherMode::Ctr(m) => m.id(),
        }
    }

    fn block_size(&self) -> usize {
        match self {
            CipherMode::Ecb(m) => m.block_size(),
            CipherMode::Cbc(m) => m.block_size(),
            CipherMode::Ctr(m) => m.block_size(),
        }
    }

    fn encrypt<P: BlockPrimitive + ?Sized>(
        &self,
        primitive: &P,
        key: &[u8],
        message: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        match self {
            CipherMode::Ecb(m) => m.encrypt(primitive, key, message),
            CipherMode::Cbc(m) => m.encrypt(primitive, key, message),
            CipherMode::Ctr(m) => m.encrypt(primitive, key, message),
        }
    }

    fn decrypt<P: BlockPrimitive + ?Sized>(
        &self,
        primitive: &P,
        key: &[u8],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        match self {
            CipherMode::Ecb(m) => m.decrypt(primitive, key, ciphertext),
            CipherMode::Cbc(m) => m.decrypt(primitive, key, ciphertext),
            CipherMode::Ctr(m) => m.decrypt(primitive, key, ciphertext),
        }
    }
}

/// Validate a block size and IV, zero-filling the IV when absent.
pub(crate) fn init_vector(block_size: usize, iv: Option<&[u8]>) -> Result<Vec<u8>, CryptoError> {
    if block_size == 0 {
        return Err(CryptoError::InvalidModeState);
    }
    match iv {
        None => Ok(vec![0u8; block_size]),
        Some(iv) if iv.len() == block_size => Ok(iv.to_vec()),
        Some(iv) => Err(CryptoError::InvalidIvLength {
            expected: block_size,
            got: iv.len(),
        }),
    }
}

/// Byte-wise XOR over the shorter of the two operands.
pub(crate) fn xor_prefix(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}

/// Reject primitive output whose length differs from its input block.
pub(crate) fn checked_output(expected: usize, output: Vec<u8>) -> Result<Vec<u8>, CryptoError> {
    if output.len() != expected {
        return Err(CryptoError::PrimitiveMismatch {
            expected,
            got: output.len(),
        });
    }
    Ok(output)
}
