use core::fmt::Debug;
use core::ops::{BitAnd, Shl, Shr};

/// The operations a type needs to be usable as the exponent of a
/// square-and-multiply ladder.
pub trait IsUnsignedInteger:
    Shr<usize, Output = Self>
    + Shl<usize, Output = Self>
    + BitAnd<Output = Self>
    + Eq
    + Ord
    + From<u16>
    + Copy
    + Debug
{
}

impl IsUnsignedInteger for u128 {}
impl IsUnsignedInteger for u64 {}
impl IsUnsignedInteger for u32 {}
impl IsUnsignedInteger for u16 {}
impl IsUnsignedInteger for usize {}
