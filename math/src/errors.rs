#[derive(Debug, PartialEq, Eq)]
pub enum ByteConversionError {
    FromBEBytesError,
    FromLEBytesError,
    InvalidValue,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CreationError {
    HexStringIsTooBig,
    EmptyString,
    InvalidHexString,
}

#[derive(Debug, PartialEq, Eq)]
pub enum PairingError {
    PointNotInSubgroup,
    DivisionByZero,
}

#[derive(Debug, PartialEq, Eq)]
pub enum RandomError {
    EntropySourceFailed,
}
