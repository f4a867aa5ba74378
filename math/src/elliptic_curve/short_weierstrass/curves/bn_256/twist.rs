use super::curve::BN256_SUBGROUP_ORDER;
use super::field_extension::Degree2ExtensionField;
use crate::cyclic_group::IsGroup;
use crate::elliptic_curve::short_weierstrass::point::ShortWeierstrassJacobianPoint;
use crate::elliptic_curve::short_weierstrass::traits::IsShortWeierstrass;
use crate::elliptic_curve::traits::IsEllipticCurve;
use crate::field::element::FieldElement;

/// The sextic twist y² = x³ + 3/ξ over Fp2, with ξ = 3 + i. The group
/// G₂ is its subgroup of r-torsion points.
#[derive(Clone, Debug)]
pub struct BN256TwistCurve;

impl IsEllipticCurve for BN256TwistCurve {
    type BaseField = Degree2ExtensionField;
    type PointRepresentation = ShortWeierstrassJacobianPoint<Self>;

    fn generator() -> Self::PointRepresentation {
        Self::PointRepresentation::new([
            FieldElement::new([
                FieldElement::from_hex_unchecked(
                    "8f25386f72c9462b81597d65ae2092c4b97792155dcdaad32b8a6dd41792534c",
                ),
                FieldElement::from_hex_unchecked(
                    "2ecca446ff6f3d4d03c76e9b5c752f28bc37b364cb05ac4a37eb32e1c3245970",
                ),
            ]),
            FieldElement::new([
                FieldElement::from_hex_unchecked(
                    "274e5747e8cafacc3716cc8699db79b22f0e4ff3c23e898f694420a3be3087a5",
                ),
                FieldElement::from_hex_unchecked(
                    "2db10ef5233b0fe3962b9ee6a4bbc2b5bde01a54f3513d42df972e128f31bf12",
                ),
            ]),
            FieldElement::one(),
        ])
    }
}

impl IsShortWeierstrass for BN256TwistCurve {
    fn a() -> FieldElement<Self::BaseField> {
        FieldElement::zero()
    }

    /// b' = 3/ξ.
    fn b() -> FieldElement<Self::BaseField> {
        FieldElement::new([
            FieldElement::from_hex_unchecked(
                "64984e1f1aa5abfb90e7f281111033b15a0cdfc596e598bb7774124bdb6c6949",
            ),
            FieldElement::from_hex_unchecked(
                "e5ee696baa9f3ff5dd7fe127026e2d0316f8dae83455ef635a2de0ad6340f0a",
            ),
        ])
    }
}

impl ShortWeierstrassJacobianPoint<BN256TwistCurve> {
    /// Checks r-torsion membership. The twist has a nontrivial cofactor,
    /// so this cuts curve points outside G₂.
    pub fn is_in_subgroup(&self) -> bool {
        self.operate_with_self(BN256_SUBGROUP_ORDER)
            .is_neutral_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elliptic_curve::short_weierstrass::curves::bn_256::field_extension::{
        mul_fp2_by_nonresidue, Fp2E,
    };

    #[test]
    fn generator_satisfies_the_twist_equation() {
        let g = BN256TwistCurve::generator();
        assert!(g.is_on_curve());
    }

    #[test]
    fn twist_coefficient_is_three_over_xi() {
        assert_eq!(
            mul_fp2_by_nonresidue(&BN256TwistCurve::b()),
            Fp2E::new_base("3")
        );
    }

    #[test]
    fn generator_is_in_the_r_torsion_subgroup() {
        let g = BN256TwistCurve::generator();
        assert!(!g.operate_with_self(2u64).is_neutral_element());
        assert!(g.is_in_subgroup());
    }

    #[test]
    fn doubling_the_generator_matches_the_known_values() {
        let double_g = BN256TwistCurve::generator().double().to_affine();
        let expected_x = Fp2E::new([
            FieldElement::from_hex_unchecked(
                "797e4195d5ea67643fe4b3f10430a2e69db82de62293283908793a1fdb67b095",
            ),
            FieldElement::from_hex_unchecked(
                "847dcea5d6eff089c7a866138d04f11ee3d3a926093681e09d83c0ff0d7055a3",
            ),
        ]);
        let expected_y = Fp2E::new([
            FieldElement::from_hex_unchecked(
                "8c48feb3db33aba73d185f4ccf4f4e37c088a0a37e4daa81b53eb1ce53eaaddd",
            ),
            FieldElement::from_hex_unchecked(
                "24e58911e0f04c1adc4b89ec50cc0484aa5680c7cf063aa704ad6190c9916b85",
            ),
        ]);
        assert_eq!(double_g.x(), &expected_x);
        assert_eq!(double_g.y(), &expected_y);
        assert!(double_g.is_on_curve());
    }

    #[test]
    fn addition_is_commutative_on_the_affine_projection() {
        let g = BN256TwistCurve::generator();
        let a = g.operate_with_self(127u64);
        let b = g.operate_with_self(31u64);
        assert_eq!(a.operate_with(&b), b.operate_with(&a));
        assert_eq!(
            a.operate_with(&b).to_affine(),
            g.operate_with_self(158u64).to_affine()
        );
    }

    #[test]
    fn adding_the_opposite_point_gives_the_neutral_element() {
        let g = BN256TwistCurve::generator().operate_with_self(77u64);
        assert!(g.operate_with(&g.neg()).is_neutral_element());
        assert_eq!(g.neg().neg(), g);
    }
}
