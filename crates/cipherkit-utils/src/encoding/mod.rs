//! Byte encodings used by the typed cipher entry points.
//!
//! Text goes through a [`TextEncoding`] chosen by the caller; fixed-size
//! values go through [`FixedBytes`], which always serializes little-endian so
//! that encrypted values decode identically on every platform.

use cipherkit_types::CryptoError;

/// Converts between strings and their byte representation.
pub trait TextEncoding: Send + Sync {
    /// Encode `text` into bytes.
    fn encode(&self, text: &str) -> Vec<u8>;

    /// Decode `bytes` into a string, failing on malformed input.
    fn decode(&self, bytes: &[u8]) -> Result<String, CryptoError>;
}

/// UTF-8 text encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8;

impl TextEncoding for Utf8 {
    fn encode(&self, text: &str) -> Vec<u8> {
        text.as_bytes().to_vec()
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, CryptoError> {
        String::from_utf8(bytes.to_vec()).map_err(|_| CryptoError::InvalidEncoding)
    }
}

/// UTF-16 little-endian text encoding, two bytes per code unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf16Le;

impl TextEncoding for Utf16Le {
    fn encode(&self, text: &str) -> Vec<u8> {
        text.encode_utf16().flat_map(|u| u.to_le_bytes()).collect()
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, CryptoError> {
        if bytes.len() % 2 != 0 {
            return Err(CryptoError::InvalidEncoding);
        }
        let units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|c| u16::from_le_bytes([c[0], c[1]]))
            .collect();
        String::from_utf16(&units).map_err(|_| CryptoError::InvalidEncoding)
    }
}

/// A value with a fixed-size byte representation.
pub trait FixedBytes: Sized {
    /// Encoded size in bytes.
    const SIZE: usize;

    /// Serialize to exactly `SIZE` bytes.
    fn to_bytes(&self) -> Vec<u8>;

    /// Deserialize from exactly `SIZE` bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError>;
}

macro_rules! impl_fixed_bytes_le {
    ($($t:ty),* $(,)?) => {
        $(
            impl FixedBytes for $t {
                const SIZE: usize = std::mem::size_of::<$t>();

                fn to_bytes(&self) -> Vec<u8> {
                    self.to_le_bytes().to_vec()
                }

                fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
                    let arr = bytes.try_into().map_err(|_| CryptoError::InvalidEncoding)?;
                    Ok(<$t>::from_le_bytes(arr))
                }
            }
        )*
    };
}

impl_fixed_bytes_le!(u16, u32, u64, u128, i16, i32, i64, i128, f32, f64);

impl<const N: usize> FixedBytes for [u8; N] {
    const SIZE: usize = N;

    fn to_bytes(&self) -> Vec<u8> {
        self.to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        bytes.try_into().map_err(|_| CryptoError::InvalidEncoding)
    }
}

/// Four bytes taken from a `(u8, u8, u8, u8)` tuple, in order.
impl FixedBytes for (u8, u8, u8, u8) {
    const SIZE: usize = 4;

    fn to_bytes(&self) -> Vec<u8> {
        vec![self.0, self.1, self.2, self.3]
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        match bytes {
            [a, b, c, d] => Ok((*a, *b, *c, *d)),
            _ => Err(CryptoError::InvalidEncoding),
        }
    }
}
