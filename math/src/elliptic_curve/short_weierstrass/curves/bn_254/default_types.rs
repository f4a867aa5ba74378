use crate::field::{
    element::FieldElement,
    fields::montgomery_backed_prime_fields::{IsModulus, U256PrimeField},
};
use crate::unsigned_integer::element::U256;

#[derive(Clone, Debug)]
pub struct FrConfig;

/// Modulus of the scalar field: the order r of the BN254 groups.
impl IsModulus<U256> for FrConfig {
    const MODULUS: U256 = U256::from_hex_unchecked(
        "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001",
    );
}

/// The scalar field of the BN254 groups.
pub type FrField = U256PrimeField<FrConfig>;
/// An element of the scalar field.
pub type FrElement = FieldElement<FrField>;
