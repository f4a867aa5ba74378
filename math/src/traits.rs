use crate::errors::ByteConversionError;

/// Types that can be converted to and from big and little endian byte
/// strings.
pub trait ByteConversion: Sized {
    fn to_bytes_be(&self) -> Vec<u8>;

    fn to_bytes_le(&self) -> Vec<u8>;

    fn from_bytes_be(bytes: &[u8]) -> Result<Self, ByteConversionError>;

    fn from_bytes_le(bytes: &[u8]) -> Result<Self, ByteConversionError>;
}
