use rand::RngCore;

use super::curve::BN256Curve;
use super::default_types::{FrConfig, FrElement};
use super::field_extension::{BN256PrimeField, Degree12ExtensionField, Fp12E, Fp2E, Fp6E};
use super::pairing::BN256AtePairing;
use super::twist::BN256TwistCurve;
use crate::cyclic_group::IsGroup;
use crate::elliptic_curve::short_weierstrass::errors::DeserializationError;
use crate::elliptic_curve::short_weierstrass::point::ShortWeierstrassJacobianPoint;
use crate::elliptic_curve::traits::{FromAffine, IsEllipticCurve, IsPairing};
use crate::errors::{PairingError, RandomError};
use crate::field::element::FieldElement;
use crate::field::fields::montgomery_backed_prime_fields::IsModulus;
use crate::traits::ByteConversion;
use crate::unsigned_integer::element::{U256, U384};

const FP_BYTES: usize = 32;

/// Bytes drawn per sampling attempt: one more than the order needs, to
/// keep the rejection region small.
const SAMPLING_BYTES: usize = 33;

fn widen(value: &U256) -> U384 {
    let mut limbs = [0u64; 6];
    limbs[2..].copy_from_slice(&value.limbs);
    U384::from_limbs(limbs)
}

/// Samples a uniform scalar in [2, r) by rejection: draws 33 big-endian
/// bytes, reduces them modulo r - 2 and retries on draws that fall in
/// the final, partially covered multiple of the range. The offset of 2
/// keeps the scalars 0 and 1 out.
fn random_scalar<R: RngCore>(rng: &mut R) -> Result<FrElement, RandomError> {
    let (range, _) = U256::sub(&FrConfig::MODULUS, &U256::from_u64(2));
    let range = widen(&range);
    let (barrier, _) = U384::sub(&U384::from_u64(1).shl(8 * SAMPLING_BYTES), &range);

    let mut bytes = [0u8; SAMPLING_BYTES];
    loop {
        rng.try_fill_bytes(&mut bytes)
            .map_err(|_| RandomError::EntropySourceFailed)?;
        let mut drawn = U384::from_u64(0);
        for byte in bytes.iter() {
            drawn = drawn.shl(8);
            drawn.limbs[5] |= *byte as u64;
        }
        let (_, remainder) = drawn.div_rem(&range);
        let (accepted_zone, _) = U384::sub(&drawn, &remainder);
        if U384::const_ge(&barrier, &accepted_zone) {
            let scalar = U384::add(&remainder, &U384::from_u64(2)).0;
            let mut limbs = [0u64; 4];
            limbs.copy_from_slice(&scalar.limbs[2..]);
            return Ok(FrElement::new(U256::from_limbs(limbs)));
        }
    }
}

/// A point of the r-order group over the base curve. Values of this
/// type are always on the curve: untrusted bytes only enter through
/// `unmarshal`, which validates the curve equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct G1(ShortWeierstrassJacobianPoint<BN256Curve>);

impl G1 {
    /// The fixed generator (1, 2).
    pub fn base() -> Self {
        Self(BN256Curve::generator())
    }

    /// Returns a uniformly random scalar k in [2, r) together with k·g.
    pub fn random<R: RngCore>(rng: &mut R) -> Result<(FrElement, Self), RandomError> {
        let scalar = random_scalar(rng)?;
        let point = Self::base().operate_with_self(scalar.representative());
        Ok((scalar, point))
    }

    pub fn point(&self) -> &ShortWeierstrassJacobianPoint<BN256Curve> {
        &self.0
    }

    /// Serializes the affine coordinates as two 32-byte big-endian
    /// words. The identity is encoded as all zeroes.
    pub fn marshal(&self) -> [u8; 2 * FP_BYTES] {
        let mut out = [0u8; 2 * FP_BYTES];
        if self.0.is_neutral_element() {
            return out;
        }
        let affine = self.0.to_affine();
        out[..FP_BYTES].copy_from_slice(&affine.x().to_bytes_be());
        out[FP_BYTES..].copy_from_slice(&affine.y().to_bytes_be());
        out
    }

    /// Decodes a point from its 64-byte affine encoding, validating the
    /// curve equation. The all-zero encoding decodes to the identity.
    pub fn unmarshal(bytes: &[u8]) -> Result<Self, DeserializationError> {
        if bytes.len() != 2 * FP_BYTES {
            return Err(DeserializationError::InvalidAmountOfBytes);
        }
        if bytes.iter().all(|byte| *byte == 0) {
            return Ok(Self::neutral_element());
        }
        let x = FieldElement::<BN256PrimeField>::from_bytes_be(&bytes[..FP_BYTES])?;
        let y = FieldElement::<BN256PrimeField>::from_bytes_be(&bytes[FP_BYTES..])?;
        let point = ShortWeierstrassJacobianPoint::from_affine(x, y)
            .map_err(|_| DeserializationError::NotOnCurve)?;
        Ok(Self(point))
    }
}

impl IsGroup for G1 {
    fn neutral_element() -> Self {
        Self(ShortWeierstrassJacobianPoint::neutral_element())
    }

    fn operate_with(&self, other: &Self) -> Self {
        Self(self.0.operate_with(&other.0))
    }

    fn neg(&self) -> Self {
        Self(self.0.neg())
    }
}

/// A point of the r-torsion subgroup of the sextic twist. Values of
/// this type are always on the twist; subgroup membership of untrusted
/// inputs is checked by the pairing (or explicitly via
/// `point().is_in_subgroup()`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct G2(ShortWeierstrassJacobianPoint<BN256TwistCurve>);

impl G2 {
    /// The fixed twist generator.
    pub fn base() -> Self {
        Self(BN256TwistCurve::generator())
    }

    /// Returns a uniformly random scalar k in [2, r) together with k·g.
    pub fn random<R: RngCore>(rng: &mut R) -> Result<(FrElement, Self), RandomError> {
        let scalar = random_scalar(rng)?;
        let point = Self::base().operate_with_self(scalar.representative());
        Ok((scalar, point))
    }

    pub fn point(&self) -> &ShortWeierstrassJacobianPoint<BN256TwistCurve> {
        &self.0
    }

    /// Serializes the affine coordinates as four 32-byte big-endian
    /// words, the imaginary component of each coordinate first. The
    /// identity is encoded as all zeroes.
    pub fn marshal(&self) -> [u8; 4 * FP_BYTES] {
        let mut out = [0u8; 4 * FP_BYTES];
        if self.0.is_neutral_element() {
            return out;
        }
        let affine = self.0.to_affine();
        let [x, y, _] = affine.coordinates();
        let [x_re, x_im] = x.value();
        let [y_re, y_im] = y.value();
        for (slot, component) in [x_im, x_re, y_im, y_re].iter().enumerate() {
            out[slot * FP_BYTES..(slot + 1) * FP_BYTES]
                .copy_from_slice(&component.to_bytes_be());
        }
        out
    }

    /// Decodes a point from its 128-byte affine encoding (imaginary
    /// components first), validating the twist equation. The empty byte
    /// string and the all-zero encoding decode to the identity.
    pub fn unmarshal(bytes: &[u8]) -> Result<Self, DeserializationError> {
        if bytes.is_empty() {
            return Ok(Self::neutral_element());
        }
        if bytes.len() != 4 * FP_BYTES {
            return Err(DeserializationError::InvalidAmountOfBytes);
        }
        if bytes.iter().all(|byte| *byte == 0) {
            return Ok(Self::neutral_element());
        }
        let mut components = Vec::with_capacity(4);
        for chunk in bytes.chunks_exact(FP_BYTES) {
            components.push(FieldElement::<BN256PrimeField>::from_bytes_be(chunk)?);
        }
        let [x_im, x_re, y_im, y_re]: [FieldElement<BN256PrimeField>; 4] =
            components.try_into().map_err(|_| DeserializationError::InvalidAmountOfBytes)?;
        let x = Fp2E::new([x_re, x_im]);
        let y = Fp2E::new([y_re, y_im]);
        let point = ShortWeierstrassJacobianPoint::from_affine(x, y)
            .map_err(|_| DeserializationError::NotOnCurve)?;
        Ok(Self(point))
    }
}

impl IsGroup for G2 {
    fn neutral_element() -> Self {
        Self(ShortWeierstrassJacobianPoint::neutral_element())
    }

    fn operate_with(&self, other: &Self) -> Self {
        Self(self.0.operate_with(&other.0))
    }

    fn neg(&self) -> Self {
        Self(self.0.neg())
    }
}

/// An element of the target group G_T, the r-th roots of unity of Fp12.
/// The group is written multiplicatively; `operate_with` multiplies,
/// `operate_with_self` exponentiates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gt(Fp12E);

impl Gt {
    /// e(g₁, g₂) for the two fixed generators.
    pub fn base() -> Self {
        // the generators are valid pairing inputs
        Self::pairing(&G1::base(), &G2::base()).unwrap()
    }

    /// Computes the optimal ate pairing.
    pub fn pairing(p: &G1, q: &G2) -> Result<Self, PairingError> {
        BN256AtePairing::compute(&p.0, &q.0).map(Self)
    }

    /// Returns a uniformly random scalar k in [2, r) together with the
    /// k-th power of the canonical generator.
    pub fn random<R: RngCore>(rng: &mut R) -> Result<(FrElement, Self), RandomError> {
        let scalar = random_scalar(rng)?;
        let element = Self::base().operate_with_self(scalar.representative());
        Ok((scalar, element))
    }

    pub fn value(&self) -> &Fp12E {
        &self.0
    }

    /// Serializes the twelve base field components, ω-half first, each
    /// Fp2 with its imaginary component first.
    pub fn marshal(&self) -> [u8; 12 * FP_BYTES] {
        let [constant_half, omega_half] = self.0.value();
        let mut out = [0u8; 12 * FP_BYTES];
        let mut slot = 0;
        for half in [omega_half, constant_half] {
            let [c0, c1, c2] = half.value();
            for fp2 in [c2, c1, c0] {
                let [re, im] = fp2.value();
                for component in [im, re] {
                    out[slot * FP_BYTES..(slot + 1) * FP_BYTES]
                        .copy_from_slice(&component.to_bytes_be());
                    slot += 1;
                }
            }
        }
        out
    }

    /// Decodes an Fp12 element from its 384-byte encoding. Only the
    /// length is validated.
    pub fn unmarshal(bytes: &[u8]) -> Result<Self, DeserializationError> {
        if bytes.len() != 12 * FP_BYTES {
            return Err(DeserializationError::InvalidAmountOfBytes);
        }
        let mut components = Vec::with_capacity(12);
        for chunk in bytes.chunks_exact(FP_BYTES) {
            components.push(FieldElement::<BN256PrimeField>::from_bytes_be(chunk)?);
        }
        let fp2_elements: Vec<Fp2E> = components
            .chunks_exact(2)
            .map(|pair| Fp2E::new([pair[1].clone(), pair[0].clone()]))
            .collect();
        let omega_half = Fp6E::new([
            fp2_elements[2].clone(),
            fp2_elements[1].clone(),
            fp2_elements[0].clone(),
        ]);
        let constant_half = Fp6E::new([
            fp2_elements[5].clone(),
            fp2_elements[4].clone(),
            fp2_elements[3].clone(),
        ]);
        Ok(Self(Fp12E::new([constant_half, omega_half])))
    }
}

impl IsGroup for Gt {
    fn neutral_element() -> Self {
        Self(FieldElement::<Degree12ExtensionField>::one())
    }

    fn operate_with(&self, other: &Self) -> Self {
        Self(&self.0 * &other.0)
    }

    /// G_T elements are unitary, so the inverse is the conjugate.
    fn neg(&self) -> Self {
        Self(self.0.conjugate())
    }
}
