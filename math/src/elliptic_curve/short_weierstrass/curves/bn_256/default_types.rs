use crate::field::{
    element::FieldElement,
    fields::montgomery_backed_prime_fields::{IsModulus, U256PrimeField},
};
use crate::unsigned_integer::element::U256;

#[derive(Clone, Debug)]
pub struct FrConfig;

/// Modulus of the scalar field: the order r of the BN256 groups.
impl IsModulus<U256> for FrConfig {
    const MODULUS: U256 = U256::from_hex_unchecked(
        "8fb501e34aa387f9aa6fecb86184dc212e8d8e12f82b39241a2ef45b57ac7261",
    );
}

/// The scalar field of the BN256 groups.
pub type FrField = U256PrimeField<FrConfig>;
/// An element of the scalar field.
pub type FrElement = FieldElement<FrField>;
