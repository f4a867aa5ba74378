use super::field_extension::BN254PrimeField;
use crate::cyclic_group::IsGroup;
use crate::elliptic_curve::short_weierstrass::point::ShortWeierstrassJacobianPoint;
use crate::elliptic_curve::short_weierstrass::traits::IsShortWeierstrass;
use crate::elliptic_curve::traits::IsEllipticCurve;
use crate::field::element::FieldElement;
use crate::unsigned_integer::element::U256;

/// The BN parameter `x` that generates the prime `p` and the subgroup
/// order `r`.
pub const BN254_X: u64 = 0x44e992b44a6909f1;

/// Order of the r-torsion subgroup,
/// r = 36x⁴ + 36x³ + 18x² + 6x + 1 = p - 6x².
pub const BN254_SUBGROUP_ORDER: U256 =
    U256::from_hex_unchecked("30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001");

/// The curve y² = x³ + 3 over the BN254 base field.
#[derive(Clone, Debug)]
pub struct BN254Curve;

impl IsEllipticCurve for BN254Curve {
    type BaseField = BN254PrimeField;
    type PointRepresentation = ShortWeierstrassJacobianPoint<Self>;

    fn generator() -> Self::PointRepresentation {
        Self::PointRepresentation::new([
            FieldElement::one(),
            FieldElement::from(2),
            FieldElement::one(),
        ])
    }
}

impl IsShortWeierstrass for BN254Curve {
    fn a() -> FieldElement<Self::BaseField> {
        FieldElement::zero()
    }

    fn b() -> FieldElement<Self::BaseField> {
        FieldElement::from(3)
    }
}

impl ShortWeierstrassJacobianPoint<BN254Curve> {
    /// Checks r-torsion membership. The curve order equals r, so this
    /// holds for every point of the curve.
    pub fn is_in_subgroup(&self) -> bool {
        self.operate_with_self(BN254_SUBGROUP_ORDER)
            .is_neutral_element()
    }
}
