use crate::field::{
    element::FieldElement,
    errors::FieldError,
    extensions::cubic::{CubicExtensionField, HasCubicNonResidue},
    fields::montgomery_backed_prime_fields::{IsModulus, U256PrimeField},
    traits::IsField,
};
use crate::unsigned_integer::element::U256;

/// Order of the base field, the 254-bit prime
/// p = 36x⁴ + 36x³ + 24x² + 6x + 1 for x = 4965661367192848881.
pub const BN254_PRIME_FIELD_ORDER: U256 =
    U256::from_hex_unchecked("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47");

#[derive(Clone, Debug)]
pub struct BN254FieldModulus;
impl IsModulus<U256> for BN254FieldModulus {
    const MODULUS: U256 = BN254_PRIME_FIELD_ORDER;
}

pub type BN254PrimeField = U256PrimeField<BN254FieldModulus>;

type FpE = FieldElement<BN254PrimeField>;

/// Quadratic extension of the base field with `i² = -1`. An element
/// `a0 + a1·i` is stored as `[a0, a1]`.
#[derive(Clone, Debug)]
pub struct Degree2ExtensionField;

impl IsField for Degree2ExtensionField {
    type BaseType = [FpE; 2];

    fn add(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        [&a[0] + &b[0], &a[1] + &b[1]]
    }

    /// Complex Karatsuba multiplication with three base field products.
    fn mul(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        let v0 = &a[0] * &b[0];
        let v1 = &a[1] * &b[1];
        [&v0 - &v1, (&a[0] + &a[1]) * (&b[0] + &b[1]) - v0 - v1]
    }

    fn square(a: &Self::BaseType) -> Self::BaseType {
        [(&a[0] - &a[1]) * (&a[0] + &a[1]), (&a[0] * &a[1]).double()]
    }

    fn sub(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        [&a[0] - &b[0], &a[1] - &b[1]]
    }

    fn neg(a: &Self::BaseType) -> Self::BaseType {
        [-&a[0], -&a[1]]
    }

    fn inv(a: &Self::BaseType) -> Result<Self::BaseType, FieldError> {
        let norm_inv = (a[0].square() + a[1].square()).inv()?;
        Ok([&a[0] * &norm_inv, -&a[1] * norm_inv])
    }

    fn zero() -> Self::BaseType {
        [FieldElement::zero(), FieldElement::zero()]
    }

    fn one() -> Self::BaseType {
        [FieldElement::one(), FieldElement::zero()]
    }

    fn from_u64(x: u64) -> Self::BaseType {
        [FieldElement::from(x), FieldElement::zero()]
    }

    fn from_base_type(x: Self::BaseType) -> Self::BaseType {
        x
    }
}

impl FieldElement<Degree2ExtensionField> {
    pub fn new_base(a_hex: &str) -> Self {
        Self::new([
            FieldElement::new(U256::from_hex_unchecked(a_hex)),
            FieldElement::zero(),
        ])
    }

    /// The Frobenius map of Fp2: negates the `i` component.
    pub fn conjugate(&self) -> Self {
        let [a0, a1] = self.value();
        Self::new([a0.clone(), -a1])
    }
}

/// Multiplies an element of Fp2 by the cubic non residue ξ = 9 + i:
/// `(a0 + a1·i)·(9 + i) = (9·a0 - a1) + (a0 + 9·a1)·i`.
pub fn mul_fp2_by_nonresidue(a: &Fp2E) -> Fp2E {
    let [a0, a1] = a.value();
    let nine_a0 = a0.double().double().double() + a0;
    let nine_a1 = a1.double().double().double() + a1;
    Fp2E::new([nine_a0 - a1, nine_a1 + a0])
}

/// Multiplies an element of Fp2 by an element of the base field.
pub fn mul_fp2_by_fp(a: &Fp2E, b: &FpE) -> Fp2E {
    let [a0, a1] = a.value();
    Fp2E::new([a0 * b, a1 * b])
}

#[derive(Debug, Clone)]
pub struct LevelTwoResidue;
impl HasCubicNonResidue<Degree2ExtensionField> for LevelTwoResidue {
    /// ξ = 9 + i, the cubic non residue used to build Fp6 = Fp2[τ]/(τ³ - ξ).
    fn residue() -> FieldElement<Degree2ExtensionField> {
        FieldElement::new([FieldElement::from(9), FieldElement::one()])
    }
}

pub type Degree6ExtensionField = CubicExtensionField<Degree2ExtensionField, LevelTwoResidue>;

pub type Fp2E = FieldElement<Degree2ExtensionField>;
pub type Fp6E = FieldElement<Degree6ExtensionField>;
pub type Fp12E = FieldElement<Degree12ExtensionField>;

/// Multiplies an element of Fp6 by τ, the cube root of ξ adjoined at
/// the Fp12 level: `τ·(c0 + c1·τ + c2·τ²) = ξ·c2 + c0·τ + c1·τ²`.
pub fn mul_fp6_by_tau(a: &Fp6E) -> Fp6E {
    let [c0, c1, c2] = a.value();
    Fp6E::new([mul_fp2_by_nonresidue(c2), c0.clone(), c1.clone()])
}

/// Multiplies an element of Fp6 by an Fp2 scalar.
pub fn mul_fp6_by_fp2(a: &Fp6E, b: &Fp2E) -> Fp6E {
    let [c0, c1, c2] = a.value();
    Fp6E::new([c0 * b, c1 * b, c2 * b])
}

/// Quadratic extension of Fp6 with `ω² = τ`. An element `b0 + b1·ω` is
/// stored as `[b0, b1]`.
#[derive(Clone, Debug)]
pub struct Degree12ExtensionField;

impl IsField for Degree12ExtensionField {
    type BaseType = [Fp6E; 2];

    fn add(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        [&a[0] + &b[0], &a[1] + &b[1]]
    }

    fn mul(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        let v0 = &a[0] * &b[0];
        let v1 = &a[1] * &b[1];
        [v0 + mul_fp6_by_tau(&v1), &a[0] * &b[1] + &a[1] * &b[0]]
    }

    fn square(a: &Self::BaseType) -> Self::BaseType {
        let v0 = &a[1] * &a[0];
        let t = mul_fp6_by_tau(&a[1]) + &a[0];
        let c0 = (&a[1] + &a[0]) * t - &v0 - mul_fp6_by_tau(&v0);
        [c0, v0.double()]
    }

    fn sub(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        [&a[0] - &b[0], &a[1] - &b[1]]
    }

    fn neg(a: &Self::BaseType) -> Self::BaseType {
        [-&a[0], -&a[1]]
    }

    fn inv(a: &Self::BaseType) -> Result<Self::BaseType, FieldError> {
        let t = (a[0].square() - mul_fp6_by_tau(&a[1].square())).inv()?;
        Ok([&a[0] * &t, -&a[1] * &t])
    }

    fn zero() -> Self::BaseType {
        [FieldElement::zero(), FieldElement::zero()]
    }

    fn one() -> Self::BaseType {
        [FieldElement::one(), FieldElement::zero()]
    }

    fn from_u64(x: u64) -> Self::BaseType {
        [FieldElement::from(x), FieldElement::zero()]
    }

    fn from_base_type(x: Self::BaseType) -> Self::BaseType {
        x
    }
}

impl FieldElement<Degree12ExtensionField> {
    /// Conjugation over Fp6: negates the ω component.
    pub fn conjugate(&self) -> Self {
        let [b0, b1] = self.value();
        Self::new([b0.clone(), -b1])
    }

    pub fn from_coefficients(coefficients: &[&str; 12]) -> Self {
        Self::new([
            Fp6E::new([
                Fp2E::new([
                    FieldElement::new(U256::from_hex_unchecked(coefficients[0])),
                    FieldElement::new(U256::from_hex_unchecked(coefficients[1])),
                ]),
                Fp2E::new([
                    FieldElement::new(U256::from_hex_unchecked(coefficients[2])),
                    FieldElement::new(U256::from_hex_unchecked(coefficients[3])),
                ]),
                Fp2E::new([
                    FieldElement::new(U256::from_hex_unchecked(coefficients[4])),
                    FieldElement::new(U256::from_hex_unchecked(coefficients[5])),
                ]),
            ]),
            Fp6E::new([
                Fp2E::new([
                    FieldElement::new(U256::from_hex_unchecked(coefficients[6])),
                    FieldElement::new(U256::from_hex_unchecked(coefficients[7])),
                ]),
                Fp2E::new([
                    FieldElement::new(U256::from_hex_unchecked(coefficients[8])),
                    FieldElement::new(U256::from_hex_unchecked(coefficients[9])),
                ]),
                Fp2E::new([
                    FieldElement::new(U256::from_hex_unchecked(coefficients[10])),
                    FieldElement::new(U256::from_hex_unchecked(coefficients[11])),
                ]),
            ]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_by_nonresidue_matches_the_generic_product() {
        let a = Fp2E::new([FieldElement::from(54321), FieldElement::from(12345)]);
        assert_eq!(mul_fp2_by_nonresidue(&a), &a * LevelTwoResidue::residue());
    }

    #[test]
    fn fp6_inverse_multiplies_to_one() {
        let a = Fp6E::new([
            Fp2E::new([FieldElement::from(6), FieldElement::from(5)]),
            Fp2E::new([FieldElement::from(4), FieldElement::from(3)]),
            Fp2E::new([FieldElement::from(2), FieldElement::from(1)]),
        ]);
        assert_eq!(&a * a.inv().unwrap(), Fp6E::one());
    }

    #[test]
    fn fp12_square_matches_multiplication() {
        let a = Fp12E::from_coefficients(&[
            "1", "21", "3", "41", "5", "61", "7", "81", "9", "a1", "b", "c1",
        ]);
        assert_eq!(a.square(), &a * &a);
        assert_eq!(&a * a.inv().unwrap(), Fp12E::one());
    }
}
