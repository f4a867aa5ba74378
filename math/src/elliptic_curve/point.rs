use crate::elliptic_curve::traits::IsEllipticCurve;
use crate::field::element::FieldElement;

/// A point in Jacobian projective coordinates `[X, Y, Z]`, denoting the
/// affine point `(X / Z², Y / Z³)`. `Z = 0` denotes the point at
/// infinity.
#[derive(Debug)]
pub struct JacobianPoint<E: IsEllipticCurve> {
    pub value: [FieldElement<E::BaseField>; 3],
}

impl<E: IsEllipticCurve> Clone for JacobianPoint<E> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl<E: IsEllipticCurve> JacobianPoint<E> {
    /// Creates an elliptic curve point giving the Jacobian
    /// `[x: y: z]` coordinates.
    pub fn new(value: [FieldElement<E::BaseField>; 3]) -> Self {
        Self { value }
    }

    /// Returns the `x` coordinate of the point.
    pub fn x(&self) -> &FieldElement<E::BaseField> {
        &self.value[0]
    }

    /// Returns the `y` coordinate of the point.
    pub fn y(&self) -> &FieldElement<E::BaseField> {
        &self.value[1]
    }

    /// Returns the `z` coordinate of the point.
    pub fn z(&self) -> &FieldElement<E::BaseField> {
        &self.value[2]
    }

    /// Returns a tuple [x, y, z] with the coordinates of the point.
    pub fn coordinates(&self) -> &[FieldElement<E::BaseField>; 3] {
        &self.value
    }

    /// Creates the same point with `z = 1`. The point at infinity is
    /// normalized to its canonical `[0, 1, 0]` representation.
    pub fn to_affine(&self) -> Self {
        let [x, y, z] = &self.value;
        if *z == FieldElement::one() {
            return self.clone();
        }
        if *z == FieldElement::zero() {
            return Self::new([
                FieldElement::zero(),
                FieldElement::one(),
                FieldElement::zero(),
            ]);
        }
        // z was just checked to be nonzero
        let z_inv = z.inv().unwrap();
        let z_inv_square = z_inv.square();
        let z_inv_cube = &z_inv_square * &z_inv;
        Self::new([x * z_inv_square, y * z_inv_cube, FieldElement::one()])
    }
}

impl<E: IsEllipticCurve> PartialEq for JacobianPoint<E> {
    /// Compares the affine projections without leaving Jacobian
    /// coordinates: `X₁·Z₂² = X₂·Z₁²` and `Y₁·Z₂³ = Y₂·Z₁³`. Every
    /// representation of the point at infinity is equal to every other.
    fn eq(&self, other: &Self) -> bool {
        let [x1, y1, z1] = &self.value;
        let [x2, y2, z2] = &other.value;
        if *z1 == FieldElement::zero() {
            return *z2 == FieldElement::zero();
        }
        if *z2 == FieldElement::zero() {
            return false;
        }
        let z1_square = z1.square();
        let z2_square = z2.square();
        x1 * &z2_square == x2 * &z1_square
            && y1 * (&z2_square * z2) == y2 * (&z1_square * z1)
    }
}

impl<E: IsEllipticCurve> Eq for JacobianPoint<E> {}
