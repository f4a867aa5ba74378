use super::curve::BN254_SUBGROUP_ORDER;
use super::field_extension::Degree2ExtensionField;
use crate::cyclic_group::IsGroup;
use crate::elliptic_curve::short_weierstrass::point::ShortWeierstrassJacobianPoint;
use crate::elliptic_curve::short_weierstrass::traits::IsShortWeierstrass;
use crate::elliptic_curve::traits::IsEllipticCurve;
use crate::field::element::FieldElement;

/// The sextic twist y² = x³ + 3/ξ over Fp2, with ξ = 9 + i. The group
/// G₂ is its subgroup of r-torsion points.
#[derive(Clone, Debug)]
pub struct BN254TwistCurve;

impl IsEllipticCurve for BN254TwistCurve {
    type BaseField = Degree2ExtensionField;
    type PointRepresentation = ShortWeierstrassJacobianPoint<Self>;

    fn generator() -> Self::PointRepresentation {
        Self::PointRepresentation::new([
            FieldElement::new([
                FieldElement::from_hex_unchecked(
                    "1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed",
                ),
                FieldElement::from_hex_unchecked(
                    "198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2",
                ),
            ]),
            FieldElement::new([
                FieldElement::from_hex_unchecked(
                    "12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa",
                ),
                FieldElement::from_hex_unchecked(
                    "90689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b",
                ),
            ]),
            FieldElement::one(),
        ])
    }
}

impl IsShortWeierstrass for BN254TwistCurve {
    fn a() -> FieldElement<Self::BaseField> {
        FieldElement::zero()
    }

    /// b' = 3/ξ.
    fn b() -> FieldElement<Self::BaseField> {
        FieldElement::new([
            FieldElement::from_hex_unchecked(
                "2b149d40ceb8aaae81be18991be06ac3b5b4c5e559dbefa33267e6dc24a138e5",
            ),
            FieldElement::from_hex_unchecked(
                "9713b03af0fed4cd2cafadeed8fdf4a74fa084e52d1852e4a2bd0685c315d2",
            ),
        ])
    }
}

impl ShortWeierstrassJacobianPoint<BN254TwistCurve> {
    /// Checks r-torsion membership. The twist has a nontrivial cofactor,
    /// so this cuts curve points outside G₂.
    pub fn is_in_subgroup(&self) -> bool {
        self.operate_with_self(BN254_SUBGROUP_ORDER)
            .is_neutral_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elliptic_curve::short_weierstrass::curves::bn_254::field_extension::{
        mul_fp2_by_nonresidue, Fp2E,
    };

    #[test]
    fn generator_satisfies_the_twist_equation() {
        let g = BN254TwistCurve::generator();
        assert!(g.is_on_curve());
        assert!(g.is_in_subgroup());
    }

    #[test]
    fn twist_coefficient_is_three_over_xi() {
        assert_eq!(
            mul_fp2_by_nonresidue(&BN254TwistCurve::b()),
            Fp2E::new_base("3")
        );
    }

    #[test]
    fn doubling_the_generator_matches_the_known_values() {
        let doubled = BN254TwistCurve::generator().double();
        // the exact Jacobian output of the doubling formula
        assert_eq!(
            doubled.x(),
            &Fp2E::new([
                FieldElement::from_hex_unchecked(
                    "11d65cded12c87317b95c05d3e9c3c98adb8624eb3bce1ad8fcae74c62173d99",
                ),
                FieldElement::from_hex_unchecked(
                    "168dfeb5f21b6dc0132207965bf363ee17eb5f9e60297b13913fa47117bd9d56",
                ),
            ])
        );
        assert_eq!(
            doubled.y(),
            &Fp2E::new([
                FieldElement::from_hex_unchecked(
                    "2891f38f6935fd84eb12d62e95fef138152ff094bd25827101c10da5c8693bc8",
                ),
                FieldElement::from_hex_unchecked(
                    "53858cc3dba708f6259df5c8932f6b1fb6348cb8fdefd6c9f5265a7b4e4ae19",
                ),
            ])
        );
        assert_eq!(
            doubled.z(),
            &Fp2E::new([
                FieldElement::from_hex_unchecked(
                    "2590bd4bb718dbd69556e3011b96811fc7a3ced21887a6f699cd9802cdf4fb54",
                ),
                FieldElement::from_hex_unchecked(
                    "120d13a0b0bfe0ebd93d335ad218672b78966266e1671de6ab59b5b9a2452eb6",
                ),
            ])
        );
        assert!(doubled.is_on_curve());
    }

    #[test]
    fn addition_is_commutative_on_the_affine_projection() {
        let g = BN254TwistCurve::generator();
        let a = g.operate_with_self(19u64);
        let b = g.operate_with_self(41u64);
        assert_eq!(a.operate_with(&b), b.operate_with(&a));
        assert_eq!(
            a.operate_with(&b).to_affine(),
            g.operate_with_self(60u64).to_affine()
        );
    }
}
