//! OAEP-style randomized message padding.
//!
//! The padded buffer is `m_len + h` bytes, `h` being the hash size: a message
//! region of `m_len` bytes (4-byte little-endian length prefix, the data,
//! zero fill, rounded up to a multiple of `h`) followed by `h` random bytes.
//! Each round couples the two regions through the hash in both directions:
//!
//! ```text
//! G = hash(result[m_len + 1..])      message ^= G (repeated)
//! H = hash(result[..m_len])          random  ^= H
//! ```
//!
//! `G` deliberately skips the first random byte. Unpadding undoes the rounds
//! in reverse order. This reproduces the mixing construction only; it makes
//! no claim to the security proof of RSA-OAEP.

mod config;

pub use config::{OaepConfig, OaepConfigBuilder};

use std::fmt;
use std::sync::Mutex;

use cipherkit_types::CryptoError;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::provider::{HashFunction, RandomSource};

/// Size of the little-endian length prefix.
const LEN_PREFIX: usize = 4;

/// Randomized, reversible padding over a hash function `H`, drawing
/// randomness from `R`.
///
/// `pad` may be called concurrently; the random source is locked only while
/// the random bytes are drawn.
pub struct Oaep<H, R> {
    hash: H,
    rng: Mutex<R>,
    config: OaepConfig,
}

impl<H, R> fmt::Debug for Oaep<H, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Oaep")
            .field("rounds", &self.config.rounds())
            .finish_non_exhaustive()
    }
}

impl<H: HashFunction, R: RandomSource> Oaep<H, R> {
    /// Single-round padding.
    pub fn new(hash: H, rng: R) -> Self {
        Self::with_config(hash, rng, OaepConfig::default())
    }

    pub fn with_config(hash: H, rng: R, config: OaepConfig) -> Self {
        Self {
            hash,
            rng: Mutex::new(rng),
            config,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.config.rounds()
    }

    pub fn hash_function(&self) -> &H {
        &self.hash
    }

    pub fn hash_size(&self) -> usize {
        self.hash.hash_size()
    }

    /// Length of the padded output for `data_len` input bytes.
    ///
    /// Inputs that [`pad`](Self::pad) would refuse are
    /// [`CryptoError::InputOverflow`] here too.
    pub fn padded_len(&self, data_len: usize) -> Result<usize, CryptoError> {
        let h = self.checked_hash_size()?;
        u32::try_from(data_len).map_err(|_| CryptoError::InputOverflow)?;
        let (_, total) = buffer_lens(data_len, h)?;
        Ok(total)
    }

    /// Pad `data`.
    pub fn pad(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let h = self.checked_hash_size()?;
        let n = u32::try_from(data.len()).map_err(|_| CryptoError::InputOverflow)?;
        let (m_len, total) = buffer_lens(data.len(), h)?;

        let mut result = vec![0u8; total];
        self.fill_random(&mut result[m_len..])?;
        result[..LEN_PREFIX].copy_from_slice(&n.to_le_bytes());
        result[LEN_PREFIX..LEN_PREFIX + data.len()].copy_from_slice(data);

        for round in 0..self.config.rounds() {
            trace!(round, "oaep: mix");
            self.mask_message(&mut result, m_len)?;
            self.mask_random(&mut result, m_len)?;
        }
        debug!(len = data.len(), padded = result.len(), "oaep pad");
        Ok(result)
    }

    /// Recover the data from a buffer produced by [`pad`](Self::pad).
    ///
    /// Buffers that could not have come from `pad` with this hash and round
    /// count are rejected with [`CryptoError::CorruptPadding`].
    pub fn unpad(&self, padded: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let h = self.checked_hash_size()?;
        if padded.len() < 2 * h || padded.len() % h != 0 {
            return Err(CryptoError::CorruptPadding);
        }
        let m_len = padded.len() - h;
        if m_len < LEN_PREFIX {
            return Err(CryptoError::CorruptPadding);
        }

        let mut buf = Zeroizing::new(padded.to_vec());
        for round in (0..self.config.rounds()).rev() {
            trace!(round, "oaep: unmix");
            self.mask_random(&mut buf, m_len)?;
            self.mask_message(&mut buf, m_len)?;
        }

        let prefix: [u8; LEN_PREFIX] = buf[..LEN_PREFIX]
            .try_into()
            .map_err(|_| CryptoError::CorruptPadding)?;
        let len = usize::try_from(u32::from_le_bytes(prefix)).map_err(|_| CryptoError::CorruptPadding)?;
        if len > m_len - LEN_PREFIX {
            return Err(CryptoError::CorruptPadding);
        }
        debug!(len, padded = padded.len(), "oaep unpad");
        Ok(buf[LEN_PREFIX..LEN_PREFIX + len].to_vec())
    }

    fn checked_hash_size(&self) -> Result<usize, CryptoError> {
        match self.hash.hash_size() {
            0 => Err(CryptoError::InvalidModeState),
            h => Ok(h),
        }
    }

    fn fill_random(&self, buf: &mut [u8]) -> Result<(), CryptoError> {
        let mut rng = self.rng.lock().map_err(|_| CryptoError::RandGenFail)?;
        rng.fill(buf)
    }

    fn digest(&self, data: &[u8]) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
        let expected = self.hash.hash_size();
        let out = Zeroizing::new(self.hash.hash(data));
        if out.len() != expected {
            return Err(CryptoError::PrimitiveMismatch {
                expected,
                got: out.len(),
            });
        }
        Ok(out)
    }

    /// `message ^= G`, `G = hash(buf[m_len + 1..])`.
    fn mask_message(&self, buf: &mut [u8], m_len: usize) -> Result<(), CryptoError> {
        let g = self.digest(&buf[m_len + 1..])?;
        for (i, b) in buf[..m_len].iter_mut().enumerate() {
            *b ^= g[i % g.len()];
        }
        Ok(())
    }

    /// `random ^= H`, `H = hash(buf[..m_len])`.
    fn mask_random(&self, buf: &mut [u8], m_len: usize) -> Result<(), CryptoError> {
        let mask = self.digest(&buf[..m_len])?;
        for (b, m) in buf[m_len..].iter_mut().zip(mask.iter()) {
            *b ^= m;
        }
        Ok(())
    }
}

/// Message region length (smallest multiple of `h` holding the length prefix
/// and `data_len` bytes) and total padded length.
fn buffer_lens(data_len: usize, h: usize) -> Result<(usize, usize), CryptoError> {
    let m_len = data_len
        .checked_add(LEN_PREFIX)
        .and_then(|n| n.div_ceil(h).checked_mul(h))
        .ok_or(CryptoError::InputOverflow)?;
    let total = m_len.checked_add(h).ok_or(CryptoError::InputOverflow)?;
    Ok((m_len, total))
}
