use crate::errors::ByteConversionError;
use crate::field::element::FieldElement;
use crate::field::errors::FieldError;
use crate::field::traits::{IsField, IsPrimeField};
use crate::traits::ByteConversion;
use crate::unsigned_integer::element::UnsignedInteger;
use crate::unsigned_integer::montgomery::MontgomeryAlgorithms;
use core::fmt::Debug;
use core::marker::PhantomData;

pub type U256PrimeField<M> = MontgomeryBackendPrimeField<M, 4>;

/// Trait to pin the modulus of a Montgomery backed prime field.
pub trait IsModulus<U>: Debug + Clone {
    const MODULUS: U;
}

/// A prime field over an odd modulus, with elements kept in Montgomery
/// form. The Montgomery parameters are computed from the modulus at
/// compile time.
#[derive(Clone, Debug, Hash, Copy)]
pub struct MontgomeryBackendPrimeField<M, const NUM_LIMBS: usize> {
    phantom: PhantomData<M>,
}

impl<M, const NUM_LIMBS: usize> MontgomeryBackendPrimeField<M, NUM_LIMBS>
where
    M: IsModulus<UnsignedInteger<NUM_LIMBS>>,
{
    pub const R2: UnsignedInteger<NUM_LIMBS> = Self::compute_r2_parameter();
    pub const MU: u64 = Self::compute_mu_parameter();
    pub const ZERO: UnsignedInteger<NUM_LIMBS> = UnsignedInteger::from_u64(0);
    pub const ONE: UnsignedInteger<NUM_LIMBS> = MontgomeryAlgorithms::cios(
        &UnsignedInteger::from_u64(1),
        &Self::R2,
        &M::MODULUS,
        &Self::MU,
    );

    /// Computes `- modulus^{-1} mod 2^{64}` by Newton iteration over the
    /// 2-adics; each round doubles the number of correct bits.
    const fn compute_mu_parameter() -> u64 {
        let modulus = M::MODULUS.limbs[NUM_LIMBS - 1];
        let mut inverse: u64 = 1;
        let mut i = 0;
        while i < 6 {
            inverse = inverse.wrapping_mul(2u64.wrapping_sub(modulus.wrapping_mul(inverse)));
            i += 1;
        }
        inverse.wrapping_neg()
    }

    /// Computes `2^{2 * 64 * NUM_LIMBS} mod modulus` by repeated modular
    /// doubling.
    const fn compute_r2_parameter() -> UnsignedInteger<NUM_LIMBS> {
        let mut result = UnsignedInteger::from_u64(1);
        let mut i = 0;
        while i < 2 * 64 * NUM_LIMBS {
            let (doubled, carry) = UnsignedInteger::add(&result, &result);
            result = doubled;
            if carry > 0 || UnsignedInteger::const_ge(&result, &M::MODULUS) {
                let (reduced, _) = UnsignedInteger::sub(&result, &M::MODULUS);
                result = reduced;
            }
            i += 1;
        }
        result
    }
}

impl<M, const NUM_LIMBS: usize> IsField for MontgomeryBackendPrimeField<M, NUM_LIMBS>
where
    M: IsModulus<UnsignedInteger<NUM_LIMBS>> + Clone + Debug,
{
    type BaseType = UnsignedInteger<NUM_LIMBS>;

    fn add(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        let (sum, overflow) = UnsignedInteger::add(a, b);
        if overflow > 0 || UnsignedInteger::const_ge(&sum, &M::MODULUS) {
            let (reduced, _) = UnsignedInteger::sub(&sum, &M::MODULUS);
            reduced
        } else {
            sum
        }
    }

    fn mul(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        MontgomeryAlgorithms::cios(a, b, &M::MODULUS, &Self::MU)
    }

    fn sub(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        if UnsignedInteger::const_ge(a, b) {
            UnsignedInteger::sub(a, b).0
        } else {
            let (gap, _) = UnsignedInteger::sub(&M::MODULUS, b);
            UnsignedInteger::add(&gap, a).0
        }
    }

    fn neg(a: &Self::BaseType) -> Self::BaseType {
        if *a == Self::ZERO {
            Self::ZERO
        } else {
            UnsignedInteger::sub(&M::MODULUS, a).0
        }
    }

    /// Fermat inversion: `a^{p - 2} mod p`.
    fn inv(a: &Self::BaseType) -> Result<Self::BaseType, FieldError> {
        if *a == Self::ZERO {
            return Err(FieldError::InverseOfZero);
        }
        let (exponent, _) = UnsignedInteger::sub(&M::MODULUS, &UnsignedInteger::from_u64(2));
        let mut result = Self::ONE;
        for index in (0..exponent.bits()).rev() {
            result = Self::square(&result);
            if exponent.bit(index) {
                result = Self::mul(&result, a);
            }
        }
        Ok(result)
    }

    fn zero() -> Self::BaseType {
        Self::ZERO
    }

    fn one() -> Self::BaseType {
        Self::ONE
    }

    fn from_u64(x: u64) -> Self::BaseType {
        MontgomeryAlgorithms::cios(
            &UnsignedInteger::from_u64(x),
            &Self::R2,
            &M::MODULUS,
            &Self::MU,
        )
    }

    /// Converts a canonical residue into Montgomery form. Inputs do not
    /// have to be reduced beforehand.
    fn from_base_type(x: Self::BaseType) -> Self::BaseType {
        MontgomeryAlgorithms::cios(&x, &Self::R2, &M::MODULUS, &Self::MU)
    }
}

impl<M, const NUM_LIMBS: usize> IsPrimeField for MontgomeryBackendPrimeField<M, NUM_LIMBS>
where
    M: IsModulus<UnsignedInteger<NUM_LIMBS>> + Clone + Debug,
{
    type RepresentativeType = UnsignedInteger<NUM_LIMBS>;

    fn representative(a: &Self::BaseType) -> Self::RepresentativeType {
        MontgomeryAlgorithms::cios(a, &UnsignedInteger::from_u64(1), &M::MODULUS, &Self::MU)
    }

    fn field_bit_size() -> usize {
        M::MODULUS.bits()
    }
}

impl<M, const NUM_LIMBS: usize> FieldElement<MontgomeryBackendPrimeField<M, NUM_LIMBS>>
where
    M: IsModulus<UnsignedInteger<NUM_LIMBS>> + Clone + Debug,
{
    /// Creates a field element from a hexadecimal literal, converting
    /// into Montgomery form at compile time.
    pub const fn from_hex_unchecked(hex: &str) -> Self {
        let integer = UnsignedInteger::<NUM_LIMBS>::from_hex_unchecked(hex);
        Self::const_from_raw(MontgomeryAlgorithms::cios(
            &integer,
            &MontgomeryBackendPrimeField::<M, NUM_LIMBS>::R2,
            &M::MODULUS,
            &MontgomeryBackendPrimeField::<M, NUM_LIMBS>::MU,
        ))
    }
}

impl<M, const NUM_LIMBS: usize> ByteConversion
    for FieldElement<MontgomeryBackendPrimeField<M, NUM_LIMBS>>
where
    M: IsModulus<UnsignedInteger<NUM_LIMBS>> + Clone + Debug,
{
    fn to_bytes_be(&self) -> Vec<u8> {
        self.representative().to_bytes_be()
    }

    fn to_bytes_le(&self) -> Vec<u8> {
        self.representative().to_bytes_le()
    }

    fn from_bytes_be(bytes: &[u8]) -> Result<Self, ByteConversionError> {
        let value = UnsignedInteger::from_bytes_be(bytes)?;
        Ok(Self::new(value))
    }

    fn from_bytes_le(bytes: &[u8]) -> Result<Self, ByteConversionError> {
        let value = UnsignedInteger::from_bytes_le(bytes)?;
        Ok(Self::new(value))
    }
}
