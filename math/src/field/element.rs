use core::ops::{Add, Mul, MulAssign, Neg, Sub};

use crate::field::errors::FieldError;
use crate::field::traits::{IsField, IsPrimeField};
use crate::unsigned_integer::traits::IsUnsignedInteger;

/// A field element with operators, backed by the representation the
/// field `F` chooses for its values.
#[derive(Debug, Clone)]
pub struct FieldElement<F: IsField> {
    value: F::BaseType,
}

impl<F: IsField> FieldElement<F> {
    /// Creates an element from the canonical representation of the
    /// field.
    pub fn new(value: F::BaseType) -> Self {
        Self {
            value: F::from_base_type(value),
        }
    }

    /// Creates an element directly from its internal representation,
    /// skipping any conversion.
    pub const fn const_from_raw(value: F::BaseType) -> Self {
        Self { value }
    }

    /// Returns a reference to the internal representation.
    pub fn value(&self) -> &F::BaseType {
        &self.value
    }

    pub fn zero() -> Self {
        Self { value: F::zero() }
    }

    pub fn one() -> Self {
        Self { value: F::one() }
    }

    pub fn square(&self) -> Self {
        Self {
            value: F::square(&self.value),
        }
    }

    pub fn double(&self) -> Self {
        self + self
    }

    /// Returns the multiplicative inverse, or
    /// `FieldError::InverseOfZero` for the zero element.
    pub fn inv(&self) -> Result<Self, FieldError> {
        Ok(Self {
            value: F::inv(&self.value)?,
        })
    }

    /// Raises `self` to the power of `exponent`, square-and-multiply
    /// over the exponent bits, most significant first.
    pub fn pow<T>(&self, exponent: T) -> Self
    where
        T: IsUnsignedInteger,
    {
        let zero = T::from(0u16);
        let one = T::from(1u16);
        let mut bits = Vec::new();
        let mut exponent = exponent;
        while exponent > zero {
            bits.push(exponent & one == one);
            exponent = exponent >> 1_usize;
        }
        let mut result = Self::one();
        for bit in bits.iter().rev() {
            result = result.square();
            if *bit {
                result = &result * self;
            }
        }
        result
    }
}

impl<F: IsPrimeField> FieldElement<F> {
    /// Returns the canonical residue of the element in `[0, p)`.
    pub fn representative(&self) -> F::RepresentativeType {
        F::representative(&self.value)
    }
}

impl<F: IsField> PartialEq for FieldElement<F> {
    fn eq(&self, other: &Self) -> bool {
        F::eq(&self.value, &other.value)
    }
}

impl<F: IsField> Eq for FieldElement<F> {}

impl<F: IsField> From<u64> for FieldElement<F> {
    fn from(value: u64) -> Self {
        Self {
            value: F::from_u64(value),
        }
    }
}

impl<F: IsField> Add<&FieldElement<F>> for &FieldElement<F> {
    type Output = FieldElement<F>;

    fn add(self, other: &FieldElement<F>) -> FieldElement<F> {
        FieldElement {
            value: F::add(&self.value, &other.value),
        }
    }
}

impl<F: IsField> Add<FieldElement<F>> for FieldElement<F> {
    type Output = FieldElement<F>;

    fn add(self, other: FieldElement<F>) -> FieldElement<F> {
        &self + &other
    }
}

impl<F: IsField> Add<&FieldElement<F>> for FieldElement<F> {
    type Output = FieldElement<F>;

    fn add(self, other: &FieldElement<F>) -> FieldElement<F> {
        &self + other
    }
}

impl<F: IsField> Add<FieldElement<F>> for &FieldElement<F> {
    type Output = FieldElement<F>;

    fn add(self, other: FieldElement<F>) -> FieldElement<F> {
        self + &other
    }
}

impl<F: IsField> Sub<&FieldElement<F>> for &FieldElement<F> {
    type Output = FieldElement<F>;

    fn sub(self, other: &FieldElement<F>) -> FieldElement<F> {
        FieldElement {
            value: F::sub(&self.value, &other.value),
        }
    }
}

impl<F: IsField> Sub<FieldElement<F>> for FieldElement<F> {
    type Output = FieldElement<F>;

    fn sub(self, other: FieldElement<F>) -> FieldElement<F> {
        &self - &other
    }
}

impl<F: IsField> Sub<&FieldElement<F>> for FieldElement<F> {
    type Output = FieldElement<F>;

    fn sub(self, other: &FieldElement<F>) -> FieldElement<F> {
        &self - other
    }
}

impl<F: IsField> Sub<FieldElement<F>> for &FieldElement<F> {
    type Output = FieldElement<F>;

    fn sub(self, other: FieldElement<F>) -> FieldElement<F> {
        self - &other
    }
}

impl<F: IsField> Mul<&FieldElement<F>> for &FieldElement<F> {
    type Output = FieldElement<F>;

    fn mul(self, other: &FieldElement<F>) -> FieldElement<F> {
        FieldElement {
            value: F::mul(&self.value, &other.value),
        }
    }
}

impl<F: IsField> Mul<FieldElement<F>> for FieldElement<F> {
    type Output = FieldElement<F>;

    fn mul(self, other: FieldElement<F>) -> FieldElement<F> {
        &self * &other
    }
}

impl<F: IsField> Mul<&FieldElement<F>> for FieldElement<F> {
    type Output = FieldElement<F>;

    fn mul(self, other: &FieldElement<F>) -> FieldElement<F> {
        &self * other
    }
}

impl<F: IsField> Mul<FieldElement<F>> for &FieldElement<F> {
    type Output = FieldElement<F>;

    fn mul(self, other: FieldElement<F>) -> FieldElement<F> {
        self * &other
    }
}

impl<F: IsField> MulAssign<&FieldElement<F>> for FieldElement<F> {
    fn mul_assign(&mut self, other: &FieldElement<F>) {
        self.value = F::mul(&self.value, &other.value);
    }
}

impl<F: IsField> MulAssign<FieldElement<F>> for FieldElement<F> {
    fn mul_assign(&mut self, other: FieldElement<F>) {
        *self *= &other;
    }
}

impl<F: IsField> Neg for &FieldElement<F> {
    type Output = FieldElement<F>;

    fn neg(self) -> FieldElement<F> {
        FieldElement {
            value: F::neg(&self.value),
        }
    }
}

impl<F: IsField> Neg for FieldElement<F> {
    type Output = FieldElement<F>;

    fn neg(self) -> FieldElement<F> {
        -&self
    }
}
