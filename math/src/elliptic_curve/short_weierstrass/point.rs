use crate::cyclic_group::IsGroup;
use crate::elliptic_curve::point::JacobianPoint;
use crate::elliptic_curve::short_weierstrass::traits::IsShortWeierstrass;
use crate::elliptic_curve::traits::{EllipticCurveError, FromAffine};
use crate::field::element::FieldElement;

#[derive(Debug, Clone)]
pub struct ShortWeierstrassJacobianPoint<E: IsShortWeierstrass>(pub JacobianPoint<E>);

impl<E: IsShortWeierstrass> ShortWeierstrassJacobianPoint<E> {
    /// Creates an elliptic curve point giving the Jacobian
    /// `[x: y: z]` coordinates.
    pub fn new(value: [FieldElement<E::BaseField>; 3]) -> Self {
        Self(JacobianPoint::new(value))
    }

    /// Returns the `x` coordinate of the point.
    pub fn x(&self) -> &FieldElement<E::BaseField> {
        self.0.x()
    }

    /// Returns the `y` coordinate of the point.
    pub fn y(&self) -> &FieldElement<E::BaseField> {
        self.0.y()
    }

    /// Returns the `z` coordinate of the point.
    pub fn z(&self) -> &FieldElement<E::BaseField> {
        self.0.z()
    }

    /// Returns a tuple [x, y, z] with the coordinates of the point.
    pub fn coordinates(&self) -> &[FieldElement<E::BaseField>; 3] {
        self.0.coordinates()
    }

    /// Creates the same point with `z = 1`; the point at infinity keeps
    /// its canonical `[0, 1, 0]` representation.
    pub fn to_affine(&self) -> Self {
        Self(self.0.to_affine())
    }

    /// Doubles the point with "dbl-2009-l" (hyperelliptic.org EFD,
    /// short Weierstrass with `a = 0`).
    pub fn double(&self) -> Self {
        if self.is_neutral_element() {
            return self.clone();
        }
        let [x1, y1, z1] = self.coordinates();

        let a = x1.square(); // A = X₁²
        let b = y1.square(); // B = Y₁²
        let c = b.square(); // C = B²
        let d = ((x1 + &b).square() - &a - &c).double(); // D = 2·((X₁ + B)² - A - C)
        let e = a.double() + &a; // E = 3·A
        let f = e.square(); // F = E²
        let x3 = &f - d.double(); // X₃ = F - 2·D
        let y3 = &e * (&d - &x3) - c.double().double().double(); // Y₃ = E·(D - X₃) - 8·C
        let z3 = (y1 * z1).double(); // Z₃ = 2·Y₁·Z₁
        Self::new([x3, y3, z3])
    }

    /// Checks the Jacobian form of the defining equation of the curve.
    pub fn is_on_curve(&self) -> bool {
        E::defining_equation_jacobian(self.coordinates()) == FieldElement::zero()
    }
}

impl<E: IsShortWeierstrass> FromAffine<E::BaseField> for ShortWeierstrassJacobianPoint<E> {
    fn from_affine(
        x: FieldElement<E::BaseField>,
        y: FieldElement<E::BaseField>,
    ) -> Result<Self, EllipticCurveError> {
        if E::defining_equation(&x, &y) != FieldElement::zero() {
            Err(EllipticCurveError::InvalidPoint)
        } else {
            Ok(Self::new([x, y, FieldElement::one()]))
        }
    }
}

impl<E: IsShortWeierstrass> PartialEq for ShortWeierstrassJacobianPoint<E> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<E: IsShortWeierstrass> Eq for ShortWeierstrassJacobianPoint<E> {}

impl<E: IsShortWeierstrass> IsGroup for ShortWeierstrassJacobianPoint<E> {
    /// The point at infinity.
    fn neutral_element() -> Self {
        Self::new([
            FieldElement::zero(),
            FieldElement::one(),
            FieldElement::zero(),
        ])
    }

    fn is_neutral_element(&self) -> bool {
        *self.z() == FieldElement::zero()
    }

    /// Adds the points with "add-2007-bl" (hyperelliptic.org EFD).
    /// Short-circuits on infinity operands and falls back to doubling
    /// when both operands denote the same point; adding opposite points
    /// yields `Z₃ = 0`, the point at infinity.
    fn operate_with(&self, other: &Self) -> Self {
        if self.is_neutral_element() {
            return other.clone();
        }
        if other.is_neutral_element() {
            return self.clone();
        }
        let [x1, y1, z1] = self.coordinates();
        let [x2, y2, z2] = other.coordinates();

        let z1z1 = z1.square(); // Z1Z1 = Z₁²
        let z2z2 = z2.square(); // Z2Z2 = Z₂²
        let u1 = x1 * &z2z2; // U1 = X₁·Z2Z2
        let u2 = x2 * &z1z1; // U2 = X₂·Z1Z1
        let s1 = y1 * (z2 * &z2z2); // S1 = Y₁·Z₂·Z2Z2
        let s2 = y2 * (z1 * &z1z1); // S2 = Y₂·Z₁·Z1Z1
        let h = &u2 - &u1; // H = U2 - U1
        let r = &s2 - &s1; // r = S2 - S1 (doubled below)
        if h == FieldElement::zero() && r == FieldElement::zero() {
            return self.double();
        }
        let i = h.double().square(); // I = (2·H)²
        let j = &h * &i; // J = H·I
        let r = r.double(); // r = 2·(S2 - S1)
        let v = &u1 * &i; // V = U1·I
        let x3 = r.square() - &j - v.double(); // X₃ = r² - J - 2·V
        let y3 = &r * (&v - &x3) - (&s1 * &j).double(); // Y₃ = r·(V - X₃) - 2·S1·J
        let z3 = ((z1 + z2).square() - z1z1 - z2z2) * h; // Z₃ = ((Z₁ + Z₂)² - Z1Z1 - Z2Z2)·H
        Self::new([x3, y3, z3])
    }

    fn neg(&self) -> Self {
        let [x, y, z] = self.coordinates();
        Self::new([x.clone(), -y, z.clone()])
    }
}
