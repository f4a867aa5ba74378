use crate::cyclic_group::IsGroup;
use crate::errors::PairingError;
use crate::field::element::FieldElement;
use crate::field::traits::IsField;
use core::fmt::Debug;

#[derive(Debug, PartialEq, Eq)]
pub enum EllipticCurveError {
    InvalidPoint,
}

pub trait IsEllipticCurve {
    /// The field where the curve coordinates live.
    type BaseField: IsField + Clone + Debug;

    /// The representation of curve points.
    type PointRepresentation: IsGroup + FromAffine<Self::BaseField>;

    /// Returns the canonical generator of the r-order subgroup.
    fn generator() -> Self::PointRepresentation;
}

pub trait FromAffine<F: IsField>: Sized {
    /// Builds a point from its affine coordinates, validating the curve
    /// equation.
    fn from_affine(
        x: FieldElement<F>,
        y: FieldElement<F>,
    ) -> Result<Self, EllipticCurveError>;
}

/// Bilinear pairings e : G1 × G2 → F.
pub trait IsPairing {
    type G1Point: IsGroup;
    type G2Point: IsGroup;
    type OutputField: IsField;

    /// Computes the pairing of `p` and `q`.
    fn compute(
        p: &Self::G1Point,
        q: &Self::G2Point,
    ) -> Result<FieldElement<Self::OutputField>, PairingError> {
        Self::compute_batch(&[(p, q)])
    }

    /// Computes the product of the pairings of a list of point pairs,
    /// sharing a single final exponentiation.
    fn compute_batch(
        pairs: &[(&Self::G1Point, &Self::G2Point)],
    ) -> Result<FieldElement<Self::OutputField>, PairingError>;
}
