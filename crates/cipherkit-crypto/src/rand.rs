//! Operating-system random source.

use cipherkit_types::CryptoError;

use crate::provider::RandomSource;

/// Random bytes from the operating system via `getrandom`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl OsRandom {
    pub fn new() -> Self {
        OsRandom
    }
}

impl RandomSource for OsRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), CryptoError> {
        if buf.is_empty() {
            return Ok(());
        }
        getrandom::getrandom(buf).map_err(|_| CryptoError::RandGenFail)
    }
}
