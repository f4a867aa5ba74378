use super::field_extension::BN256PrimeField;
use crate::cyclic_group::IsGroup;
use crate::elliptic_curve::short_weierstrass::point::ShortWeierstrassJacobianPoint;
use crate::elliptic_curve::short_weierstrass::traits::IsShortWeierstrass;
use crate::elliptic_curve::traits::IsEllipticCurve;
use crate::field::element::FieldElement;
use crate::unsigned_integer::element::U256;

/// The BN parameter `x` that generates the prime `p` and the subgroup
/// order `r`.
pub const BN256_X: u64 = 0x5a76ae9aec588301;

/// Order of the r-torsion subgroup,
/// r = 36x⁴ + 36x³ + 18x² + 6x + 1 = p - 6x².
pub const BN256_SUBGROUP_ORDER: U256 =
    U256::from_hex_unchecked("8fb501e34aa387f9aa6fecb86184dc212e8d8e12f82b39241a2ef45b57ac7261");

/// The curve y² = x³ + 3 over the BN256 base field. Its order is r, so
/// the whole curve is the group G₁.
#[derive(Clone, Debug)]
pub struct BN256Curve;

impl IsEllipticCurve for BN256Curve {
    type BaseField = BN256PrimeField;
    type PointRepresentation = ShortWeierstrassJacobianPoint<Self>;

    fn generator() -> Self::PointRepresentation {
        Self::PointRepresentation::new([
            FieldElement::one(),
            FieldElement::from(2),
            FieldElement::one(),
        ])
    }
}

impl IsShortWeierstrass for BN256Curve {
    fn a() -> FieldElement<Self::BaseField> {
        FieldElement::zero()
    }

    fn b() -> FieldElement<Self::BaseField> {
        FieldElement::from(3)
    }
}

impl ShortWeierstrassJacobianPoint<BN256Curve> {
    /// Checks r-torsion membership. The curve order equals r, so this
    /// holds for every point of the curve.
    pub fn is_in_subgroup(&self) -> bool {
        self.operate_with_self(BN256_SUBGROUP_ORDER)
            .is_neutral_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type G1 = ShortWeierstrassJacobianPoint<BN256Curve>;

    fn point() -> G1 {
        // 32498273234·g, in the exact Jacobian coordinates the ladder
        // produces
        G1::new([
            FieldElement::from_hex_unchecked(
                "24a5ea8291a100ce13f820a2c4fb646de6bb61405aea18e09e55e5203b202158",
            ),
            FieldElement::from_hex_unchecked(
                "10414644ba678869177d31317a785161a8556e4d48da1e3ba8b7fadcf92f2730",
            ),
            FieldElement::one(),
        ])
    }

    #[test]
    fn generator_satisfies_the_curve_equation() {
        let g = BN256Curve::generator();
        assert!(g.is_on_curve());
        assert_eq!(
            BN256Curve::defining_equation(g.x(), g.y()),
            FieldElement::zero()
        );
    }

    #[test]
    fn generator_has_order_r() {
        let g = BN256Curve::generator();
        assert!(!g.operate_with_self(2u64).is_neutral_element());
        assert!(g.operate_with_self(BN256_SUBGROUP_ORDER).is_neutral_element());
        assert!(g.is_in_subgroup());
    }

    #[test]
    fn doubling_matches_adding_a_point_to_itself() {
        let g = BN256Curve::generator();
        assert_eq!(g.double(), g.operate_with(&g));
        assert_eq!(g.double(), g.operate_with_self(2u64));
    }

    #[test]
    fn scalar_multiplication_matches_the_known_jacobian_output() {
        let g = BN256Curve::generator();
        let result = g.operate_with_self(32498273234u64);
        // exact Jacobian output of the double-and-add trajectory
        assert_eq!(
            result.x(),
            &FieldElement::from_hex_unchecked(
                "6027a7284a496191aa4bac641e992ff8434c5325718c87e241d5ea1c05b88569"
            )
        );
        assert_eq!(
            result.y(),
            &FieldElement::from_hex_unchecked(
                "21d513ccea3e268723ba8032fad00caed57dbc4d611a07a4a9e621f33755d496"
            )
        );
        assert_eq!(
            result.z(),
            &FieldElement::from_hex_unchecked(
                "70efed761d5132cddb0e8a12de6f44d7d4b64bbc2098e3549fac4e4ae1b0dba9"
            )
        );
        assert_eq!(result.to_affine(), point());
    }

    #[test]
    fn scalar_multiplication_by_zero_and_one() {
        let g = BN256Curve::generator();
        assert!(g.operate_with_self(0u64).is_neutral_element());
        assert_eq!(g.operate_with_self(1u64), g);
    }

    #[test]
    fn addition_is_commutative_on_the_affine_projection() {
        let a = BN256Curve::generator();
        let b = point();
        assert_eq!(a.operate_with(&b), b.operate_with(&a));
    }

    #[test]
    fn adding_the_neutral_element_is_the_identity() {
        let g = point();
        let neutral = G1::neutral_element();
        assert_eq!(g.operate_with(&neutral), g);
        assert_eq!(neutral.operate_with(&g), g);
        assert_eq!(neutral.operate_with(&neutral), neutral);
    }

    #[test]
    fn adding_the_opposite_point_gives_the_neutral_element() {
        let g = point();
        assert!(g.operate_with(&g.neg()).is_neutral_element());
        assert_eq!(G1::neutral_element().neg(), G1::neutral_element());
    }

    #[test]
    fn scalar_multiplication_distributes_over_scalar_addition() {
        let g = BN256Curve::generator();
        let k1 = 1234567890123u64;
        let k2 = 9876543210987u64;
        assert_eq!(
            g.operate_with_self(k1).operate_with(&g.operate_with_self(k2)),
            g.operate_with_self(k1 + k2)
        );
    }

    #[test]
    fn affine_normalization_preserves_the_point() {
        let g = BN256Curve::generator().operate_with_self(98765u64);
        let affine = g.to_affine();
        assert_eq!(affine, g);
        assert_eq!(affine.z(), &FieldElement::one());
        assert_eq!(
            G1::neutral_element().to_affine(),
            G1::neutral_element()
        );
    }
}
