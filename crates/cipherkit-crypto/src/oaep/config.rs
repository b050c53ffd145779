//! OAEP configuration with builder pattern.

use cipherkit_types::CryptoError;

/// Run-time OAEP settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OaepConfig {
    rounds: u32,
}

impl Default for OaepConfig {
    fn default() -> Self {
        Self { rounds: 1 }
    }
}

impl OaepConfig {
    /// Create a builder for OAEP configuration.
    pub fn builder() -> OaepConfigBuilder {
        OaepConfigBuilder::default()
    }

    /// Number of mixing passes.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }
}

/// Builder for `OaepConfig`.
#[derive(Debug, Clone)]
pub struct OaepConfigBuilder {
    rounds: u32,
}

impl Default for OaepConfigBuilder {
    fn default() -> Self {
        Self { rounds: 1 }
    }
}

impl OaepConfigBuilder {
    pub fn rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Validate and build. Zero rounds is [`CryptoError::InvalidArg`].
    pub fn build(self) -> Result<OaepConfig, CryptoError> {
        if self.rounds == 0 {
            return Err(CryptoError::InvalidArg);
        }
        Ok(OaepConfig {
            rounds: self.rounds,
        })
    }
}
