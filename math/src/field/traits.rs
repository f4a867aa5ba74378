use crate::field::errors::FieldError;
use crate::unsigned_integer::traits::IsUnsignedInteger;
use core::fmt::Debug;

/// Trait with the operations a struct needs to define a field over its
/// `BaseType` representation.
pub trait IsField: Debug + Clone {
    /// The underlying representation of field elements.
    type BaseType: Clone + Debug + PartialEq + Eq;

    /// Returns the sum of `a` and `b`.
    fn add(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType;

    /// Returns the product of `a` and `b`.
    fn mul(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType;

    fn square(a: &Self::BaseType) -> Self::BaseType {
        Self::mul(a, a)
    }

    /// Returns the difference of `a` and `b`.
    fn sub(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType;

    /// Returns the additive inverse of `a`.
    fn neg(a: &Self::BaseType) -> Self::BaseType;

    /// Returns the multiplicative inverse of `a`.
    fn inv(a: &Self::BaseType) -> Result<Self::BaseType, FieldError>;

    fn div(a: &Self::BaseType, b: &Self::BaseType) -> Result<Self::BaseType, FieldError> {
        let b_inv = Self::inv(b).map_err(|_| FieldError::DivisionByZero)?;
        Ok(Self::mul(a, &b_inv))
    }

    fn eq(a: &Self::BaseType, b: &Self::BaseType) -> bool {
        a == b
    }

    /// Returns the additive neutral element.
    fn zero() -> Self::BaseType;

    /// Returns the multiplicative neutral element.
    fn one() -> Self::BaseType;

    /// Returns the element `x * 1` where 1 is the multiplicative neutral
    /// element.
    fn from_u64(x: u64) -> Self::BaseType;

    /// Takes as input an element of `BaseType` and returns the internal
    /// representation of that element in the field.
    fn from_base_type(x: Self::BaseType) -> Self::BaseType;
}

/// Fields with a canonical representation as an unsigned integer.
pub trait IsPrimeField: IsField {
    type RepresentativeType: IsUnsignedInteger;

    /// Returns the canonical residue in the range `[0, p)`.
    fn representative(a: &Self::BaseType) -> Self::RepresentativeType;

    fn field_bit_size() -> usize;
}
