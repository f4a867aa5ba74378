use crate::elliptic_curve::traits::IsEllipticCurve;
use crate::field::element::FieldElement;
use core::fmt::Debug;

/// Trait to add elliptic curves behaviour to a struct.
/// We use the short Weierstrass form equation: `y^2 = x^3 + a * x  + b`.
pub trait IsShortWeierstrass: IsEllipticCurve + Clone + Debug {
    /// `a` coefficient for the equation `y^2 = x^3 + a * x  + b`.
    fn a() -> FieldElement<Self::BaseField>;

    /// `b` coefficient for the equation  `y^2 = x^3 + a * x  + b`.
    fn b() -> FieldElement<Self::BaseField>;

    /// Evaluates the curve equation at an affine point.
    fn defining_equation(
        x: &FieldElement<Self::BaseField>,
        y: &FieldElement<Self::BaseField>,
    ) -> FieldElement<Self::BaseField> {
        y.square() - x.square() * x - Self::a() * x - Self::b()
    }

    /// Evaluates the homogenized curve equation at a Jacobian point:
    /// `Y² - X³ - a·X·Z⁴ - b·Z⁶`.
    fn defining_equation_jacobian(
        coordinates: &[FieldElement<Self::BaseField>; 3],
    ) -> FieldElement<Self::BaseField> {
        let [x, y, z] = coordinates;
        let z_square = z.square();
        let z_pow_4 = z_square.square();
        y.square() - x.square() * x - Self::a() * x * &z_pow_4 - Self::b() * z_pow_4 * z_square
    }
}
