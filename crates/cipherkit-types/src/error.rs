/// Cryptographic operation errors.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    // General errors
    #[error("invalid argument")]
    InvalidArg,
    #[error("invalid key")]
    InvalidKey,
    #[error("input data too long")]
    InputOverflow,

    // Mode errors
    #[error("mode: invalid state (block size must be non-zero and match the primitive)")]
    InvalidModeState,
    #[error("invalid iv length: expected {expected}, got {got}")]
    InvalidIvLength { expected: usize, got: usize },
    #[error("primitive output length mismatch: expected {expected}, got {got}")]
    PrimitiveMismatch { expected: usize, got: usize },

    // Padding errors
    #[error("oaep: corrupt padding")]
    CorruptPadding,

    // Random source errors
    #[error("random source: generation failed")]
    RandGenFail,

    // Encoding errors
    #[error("encode: invalid byte encoding")]
    InvalidEncoding,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
