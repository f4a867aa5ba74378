use super::{
    curve::{BN256Curve, BN256_X},
    field_extension::{
        mul_fp2_by_fp, mul_fp6_by_fp2, mul_fp6_by_tau, BN256PrimeField, Degree12ExtensionField,
        Fp12E, Fp2E, Fp6E,
    },
    twist::BN256TwistCurve,
};
use crate::{
    cyclic_group::IsGroup,
    elliptic_curve::{
        short_weierstrass::point::ShortWeierstrassJacobianPoint, traits::IsPairing,
    },
    errors::PairingError,
    field::element::FieldElement,
};

type FpE = FieldElement<BN256PrimeField>;
type G1Point = ShortWeierstrassJacobianPoint<BN256Curve>;
type G2Point = ShortWeierstrassJacobianPoint<BN256TwistCurve>;

/// The ate loop parameter 6x + 2.
pub const SIX_X_PLUS_TWO: u128 = 6 * (BN256_X as u128) + 2;

/// Digits of the non-adjacent form of 6x + 2, most significant digit
/// first. The Miller loop walks every digit below the leading one.
pub const SIX_X_PLUS_TWO_NAF: [i8; 66] = {
    let mut naf = [0i8; 66];
    let mut value = SIX_X_PLUS_TWO;
    let mut i = 66;
    while value > 0 {
        i -= 1;
        if value % 2 == 0 {
            naf[i] = 0;
        } else if value % 4 == 1 {
            naf[i] = 1;
            value -= 1;
        } else {
            naf[i] = -1;
            value += 1;
        }
        value /= 2;
    }
    naf
};

/// GAMMA_1i = ξ^{i·(p - 1)/6}, the constants of the Frobenius map over
/// Fp12.
pub const GAMMA_11: Fp2E = Fp2E::const_from_raw([
    FpE::from_hex_unchecked("2c367d29da983b5c9f280982fcfb8572049bf5d107a03af04b691f508d4c26a8"),
    FpE::from_hex_unchecked("132ab1f7691f80c23a669513f62d3830d78a8c6771ca7f4955aa3f973812f5ec"),
]);

pub const GAMMA_12: Fp2E = Fp2E::const_from_raw([
    FpE::from_hex_unchecked("2338e7dbf670f3602324553813044cae8580d5c665af30b5887f568e3cb7f583"),
    FpE::from_hex_unchecked("39b2f6d974b6caadc7d02cfe70ced2875207b77fdf0538e78ce345691eca8113"),
]);

pub const GAMMA_13: Fp2E = Fp2E::const_from_raw([
    FpE::from_hex_unchecked("557c27d02b743e1399c493ca21477d195a60587870c386048a71b87fb5a357a9"),
    FpE::from_hex_unchecked("70bf758d37b9324122ddcea602519b2a20c580983194dc6f86f87d12c2e17094"),
]);

pub const GAMMA_14: Fp2E = Fp2E::const_from_raw([
    FpE::from_hex_unchecked("2fdafc97ff7a78a03552af4af082d0c917ca1b663b9d811a308270ab07b3d0db"),
    FpE::from_hex_unchecked("2bf695e2b89fd9c2802d69ceaa1d943860546a1f7686cf204a0e9aa690456cbe"),
]);

pub const GAMMA_15: Fp2E = Fp2E::const_from_raw([
    FpE::from_hex_unchecked("a413db9483996adefba2bbdd39d7084f642c8a174eeafb6fbc0628130949472"),
    FpE::from_hex_unchecked("2c0b9dfb16f484238a164906776a30baee222a496981689dc5d7f8cfedd7cf9"),
]);

/// GAMMA_2i = GAMMA_1i · conj(GAMMA_1i); these lie in the base field.
pub const GAMMA_21: FpE =
    FpE::from_hex_unchecked("8fb501e34aa387f8df19eaf8dd8fdf2966ddd5416786143c5e5d7456b745ed39");

pub const GAMMA_22: FpE =
    FpE::from_hex_unchecked("8fb501e34aa387f8df19eaf8dd8fdf2966ddd5416786143c5e5d7456b745ed38");

pub const GAMMA_23: FpE =
    FpE::from_hex_unchecked("8fb501e34aa387f9aa6fecb86184dc21ee5b88d120b5b59e185cac6c5e089666");

pub const GAMMA_24: FpE =
    FpE::from_hex_unchecked("cb5601bf83f4fcf8877db38fb92fa161b9ff3815a6c2a92e");

pub const GAMMA_25: FpE =
    FpE::from_hex_unchecked("cb5601bf83f4fcf8877db38fb92fa161b9ff3815a6c2a92f");

#[derive(Clone)]
pub struct BN256AtePairing;

impl IsPairing for BN256AtePairing {
    type G1Point = G1Point;
    type G2Point = G2Point;
    type OutputField = Degree12ExtensionField;

    /// Computes the product of the optimal ate pairings for a list of
    /// point pairs. Pairs with a neutral member contribute the identity.
    fn compute_batch(pairs: &[(&Self::G1Point, &Self::G2Point)]) -> Result<Fp12E, PairingError> {
        let mut result = Fp12E::one();
        for (p, q) in pairs {
            if !p.is_in_subgroup() || !q.is_in_subgroup() {
                return Err(PairingError::PointNotInSubgroup);
            }
            if !p.is_neutral_element() && !q.is_neutral_element() {
                let p = p.to_affine();
                let q = q.to_affine();
                result *= miller(&q, &p);
            }
        }
        final_exponentiation(&result)
    }
}

/// Doubling step of the Miller loop: advances the accumulator to `2r`
/// and evaluates the tangent line at the affine point `p`, returning
/// the three Fp2 coefficients of the sparse line value. The formulas
/// are the Jacobian ones of the DCLXVI library, reusing the cached
/// `z²` of the accumulator.
fn line_function_double(r: &G2Point, p: &G1Point) -> (Fp2E, Fp2E, Fp2E, G2Point) {
    let [rx, ry, rz] = r.coordinates();
    let [px, py, _] = p.coordinates();

    let r_t = rz.square();
    let a = rx.square();
    let b = ry.square();
    let c = b.square();
    let d = ((rx + &b).square() - &a - &c).double();
    let e = a.double() + &a;
    let f = e.square();

    let x3 = &f - d.double();
    let y3 = &e * (&d - &x3) - c.double().double().double();
    let z3 = (ry + rz).square() - &b - &r_t;

    let coefficient_a = (rx + &e).square() - &a - &f - b.double().double();
    let coefficient_b = -mul_fp2_by_fp(&(&e * &r_t).double(), px);
    let coefficient_c = mul_fp2_by_fp(&(&z3 * &r_t).double(), py);

    (
        coefficient_a,
        coefficient_b,
        coefficient_c,
        G2Point::new([x3, y3, z3]),
    )
}

/// Mixed addition step of the Miller loop: advances the accumulator to
/// `r + q` and evaluates the chord line through both at the affine
/// point `p`. `q` must be affine and `q_y_square` must hold `q.y²`.
fn line_function_add(
    r: &G2Point,
    q: &G2Point,
    p: &G1Point,
    q_y_square: &Fp2E,
) -> (Fp2E, Fp2E, Fp2E, G2Point) {
    let [rx, ry, rz] = r.coordinates();
    let [qx, qy, _] = q.coordinates();
    let [px, py, _] = p.coordinates();

    let r_t = rz.square();
    let b = qx * &r_t;
    let d = ((qy + rz).square() - q_y_square - &r_t) * &r_t;
    let h = b - rx;
    let i = h.square();
    let e = i.double().double();
    let j = &h * &e;
    let l1 = d - ry - ry;
    let v = rx * &e;

    let x3 = l1.square() - &j - v.double();
    let z3 = (rz + &h).square() - &r_t - &i;
    let y3 = (&v - &x3) * &l1 - (ry * &j).double();

    let z3_square = z3.square();
    let t = (qy + &z3).square() - q_y_square - &z3_square;
    let coefficient_a = (&l1 * qx).double() - &t;
    let coefficient_b = -mul_fp2_by_fp(&l1.double(), px);
    let coefficient_c = mul_fp2_by_fp(&z3.double(), py);

    (
        coefficient_a,
        coefficient_b,
        coefficient_c,
        G2Point::new([x3, y3, z3]),
    )
}

/// Multiplies the Miller accumulator by the sparse Fp12 element
/// `(a·τ + b)·ω + c` with the schedule of `fp12e_mul_line` from DCLXVI.
fn mul_by_line(f: &Fp12E, a: &Fp2E, b: &Fp2E, c: &Fp2E) -> Fp12E {
    let [f0, f1] = f.value();
    let t1 = Fp6E::new([b.clone(), a.clone(), Fp2E::zero()]) * f1;
    let t2 = Fp6E::new([b + c, a.clone(), Fp2E::zero()]);
    let t3 = mul_fp6_by_fp2(f0, c);
    let new_f1 = (f1 + f0) * t2 - &t1 - &t3;
    let new_f0 = t3 + mul_fp6_by_tau(&t1);
    Fp12E::new([new_f0, new_f1])
}

/// The Miller loop of the optimal ate pairing, walking the non-adjacent
/// form of 6x + 2 and closing with the two Frobenius correction lines.
/// Both inputs must be affine.
fn miller(q: &G2Point, p: &G1Point) -> Fp12E {
    let q_neg = q.neg();
    let q_y_square = q.y().square();
    let mut r = q.clone();
    let mut f = Fp12E::one();

    for (iteration, digit) in SIX_X_PLUS_TWO_NAF[1..].iter().enumerate() {
        if iteration != 0 {
            f = f.square();
        }
        let (coefficient_a, coefficient_b, coefficient_c, new_r) = line_function_double(&r, p);
        f = mul_by_line(&f, &coefficient_a, &coefficient_b, &coefficient_c);
        r = new_r;
        match *digit {
            1 => {
                let (coefficient_a, coefficient_b, coefficient_c, new_r) =
                    line_function_add(&r, q, p, &q_y_square);
                f = mul_by_line(&f, &coefficient_a, &coefficient_b, &coefficient_c);
                r = new_r;
            }
            -1 => {
                let (coefficient_a, coefficient_b, coefficient_c, new_r) =
                    line_function_add(&r, &q_neg, p, &q_y_square);
                f = mul_by_line(&f, &coefficient_a, &coefficient_b, &coefficient_c);
                r = new_r;
            }
            _ => {}
        }
    }

    // Q1 is the Frobenius of Q carried through the twist isomorphism:
    // conjugate the coordinates and absorb the leftover powers of ω
    // into ξ^{(p-1)/3} and ξ^{(p-1)/2}. For Q2 the two conjugations of
    // the p² power cancel and only the ξ^{(p²-1)/3} factor remains,
    // which lies in the base field; ignoring the sign of y gives -Q2.
    let q1 = G2Point::new([
        q.x().conjugate() * GAMMA_12,
        q.y().conjugate() * GAMMA_13,
        Fp2E::one(),
    ]);
    let q1_y_square = q1.y().square();
    let (coefficient_a, coefficient_b, coefficient_c, new_r) =
        line_function_add(&r, &q1, p, &q1_y_square);
    f = mul_by_line(&f, &coefficient_a, &coefficient_b, &coefficient_c);
    r = new_r;

    let minus_q2 = G2Point::new([
        mul_fp2_by_fp(q.x(), &GAMMA_22),
        q.y().clone(),
        Fp2E::one(),
    ]);
    let minus_q2_y_square = minus_q2.y().square();
    let (coefficient_a, coefficient_b, coefficient_c, _) =
        line_function_add(&r, &minus_q2, p, &minus_q2_y_square);
    mul_by_line(&f, &coefficient_a, &coefficient_b, &coefficient_c)
}

/// The Frobenius endomorphism f ↦ f^p of Fp12, component wise with the
/// GAMMA_1 constants.
pub fn frobenius(f: &Fp12E) -> Fp12E {
    let [b0, b1] = f.value();
    let [x0, x1, x2] = b0.value();
    let [y0, y1, y2] = b1.value();
    let c0 = Fp6E::new([
        x0.conjugate(),
        x1.conjugate() * GAMMA_12,
        x2.conjugate() * GAMMA_14,
    ]);
    let c1 = Fp6E::new([
        y0.conjugate() * GAMMA_11,
        y1.conjugate() * GAMMA_13,
        y2.conjugate() * GAMMA_15,
    ]);
    Fp12E::new([c0, c1])
}

/// f ↦ f^{p²}; no conjugations, and the constants lie in the base
/// field.
pub fn frobenius_square(f: &Fp12E) -> Fp12E {
    let [b0, b1] = f.value();
    let [x0, x1, x2] = b0.value();
    let [y0, y1, y2] = b1.value();
    let c0 = Fp6E::new([
        x0.clone(),
        mul_fp2_by_fp(x1, &GAMMA_22),
        mul_fp2_by_fp(x2, &GAMMA_24),
    ]);
    let c1 = Fp6E::new([
        mul_fp2_by_fp(y0, &GAMMA_21),
        mul_fp2_by_fp(y1, &GAMMA_23),
        mul_fp2_by_fp(y2, &GAMMA_25),
    ]);
    Fp12E::new([c0, c1])
}

/// Raises the Miller output to (p¹² - 1)/r. The easy part uses the
/// Frobenius and one inversion; the hard part is the addition chain of
/// Algorithm 31 from ePrint 2010/354, with the powers by x computed by
/// plain square-and-multiply.
pub fn final_exponentiation(f: &Fp12E) -> Result<Fp12E, PairingError> {
    let f_inverse = f.inv().map_err(|_| PairingError::DivisionByZero)?;
    let mut t1 = f.conjugate() * f_inverse;
    t1 = frobenius_square(&t1) * &t1;

    let fp1 = frobenius(&t1);
    let fp2 = frobenius_square(&t1);
    let fp3 = frobenius(&fp2);

    let fu1 = t1.pow(BN256_X);
    let fu2 = fu1.pow(BN256_X);
    let fu3 = fu2.pow(BN256_X);

    let y3 = frobenius(&fu1).conjugate();
    let fu2p = frobenius(&fu2);
    let fu3p = frobenius(&fu3);
    let y2 = frobenius_square(&fu2);

    let y0 = fp1 * fp2 * fp3;
    let y1 = t1.conjugate();
    let y4 = (&fu1 * fu2p).conjugate();
    let y5 = fu2.conjugate();
    let y6 = (fu3 * fu3p).conjugate();

    let t0 = y6.square() * &y4 * &y5;
    let t1 = y3 * &y5 * &t0;
    let t0 = t0 * y2;
    let t1 = (t1.square() * t0).square();
    let t0 = &t1 * y1;
    let t1 = t1 * y0;
    Ok(t0.square() * t1)
}

#[cfg(test)]
mod tests {
    use super::super::curve::BN256_SUBGROUP_ORDER;
    use super::super::field_extension::BN256_PRIME_FIELD_ORDER;
    use super::*;
    use crate::elliptic_curve::traits::IsEllipticCurve;
    use crate::unsigned_integer::element::U256;

    #[test]
    fn loop_parameter_digits_form_a_non_adjacent_form() {
        let mut value: i128 = 0;
        for digit in SIX_X_PLUS_TWO_NAF.iter() {
            value = 2 * value + *digit as i128;
        }
        assert_eq!(value as u128, SIX_X_PLUS_TWO);
        assert_eq!(SIX_X_PLUS_TWO_NAF[0], 1);
        for window in SIX_X_PLUS_TWO_NAF.windows(2) {
            assert!(window[0] == 0 || window[1] == 0);
        }
    }

    #[test]
    fn gamma_constants_match_their_defining_powers() {
        let xi = Fp2E::new([FieldElement::from(3), FieldElement::one()]);
        // (p - 1)/6
        let exponent = U256::from_hex_unchecked(
            "17f380508c7096a99c67fcc9659624b0526496cd85739e45040f72120fac1911",
        );
        assert_eq!(xi.pow(exponent), GAMMA_11);
        assert_eq!(&GAMMA_11 * &GAMMA_11, GAMMA_12);
        assert_eq!(&GAMMA_11 * &GAMMA_12, GAMMA_13);
        assert_eq!(&GAMMA_11 * &GAMMA_13, GAMMA_14);
        assert_eq!(&GAMMA_11 * &GAMMA_14, GAMMA_15);
        let embedded = |gamma: &FpE| Fp2E::new([gamma.clone(), FieldElement::zero()]);
        assert_eq!(&GAMMA_11 * GAMMA_11.conjugate(), embedded(&GAMMA_21));
        assert_eq!(&GAMMA_12 * GAMMA_12.conjugate(), embedded(&GAMMA_22));
        assert_eq!(&GAMMA_13 * GAMMA_13.conjugate(), embedded(&GAMMA_23));
        assert_eq!(&GAMMA_14 * GAMMA_14.conjugate(), embedded(&GAMMA_24));
        assert_eq!(&GAMMA_15 * GAMMA_15.conjugate(), embedded(&GAMMA_25));
    }

    #[test]
    fn frobenius_matches_the_power_by_p() {
        let f = Fp12E::from_coefficients(&[
            "1", "2", "3", "4", "5", "6", "7", "8", "9", "a", "b", "c",
        ]);
        assert_eq!(frobenius(&f), f.pow(BN256_PRIME_FIELD_ORDER));
        assert_eq!(frobenius_square(&f), frobenius(&frobenius(&f)));
    }

    #[test]
    fn applying_frobenius_twelve_times_is_the_identity() {
        let f = Fp12E::from_coefficients(&[
            "1", "2", "3", "4", "5", "6", "7", "8", "9", "a", "b", "c",
        ]);
        let mut result = frobenius(&f);
        for _ in 1..12 {
            result = frobenius(&result);
        }
        assert_eq!(f, result);
    }

    #[test]
    fn line_function_double_doubles_the_accumulator() {
        let p = BN256Curve::generator().to_affine();
        let q = BN256TwistCurve::generator().to_affine();
        let (_, _, _, doubled) = line_function_double(&q, &p);
        assert_eq!(doubled, q.double());
    }

    #[test]
    fn line_function_add_adds_the_points() {
        let p = BN256Curve::generator().to_affine();
        let g = BN256TwistCurve::generator();
        let r = g.operate_with_self(12u64);
        let q = g.operate_with_self(23u64).to_affine();
        let q_y_square = q.y().square();
        let (_, _, _, sum) = line_function_add(&r, &q, &p, &q_y_square);
        assert_eq!(sum, g.operate_with_self(35u64));
    }

    #[test]
    fn pairing_of_generators_is_not_degenerate() {
        let p = BN256Curve::generator();
        let q = BN256TwistCurve::generator();
        let e = BN256AtePairing::compute(&p, &q).unwrap();
        assert_ne!(e, Fp12E::one());
        // G_T has order r
        assert_eq!(e.pow(BN256_SUBGROUP_ORDER), Fp12E::one());
    }

    #[test]
    fn pairing_is_bilinear() {
        let p = BN256Curve::generator();
        let q = BN256TwistCurve::generator();
        let a = 5050505u64;
        let b = 333333u64;

        // e(aP, bQ)·e(abP, -Q) = 1
        let result = BN256AtePairing::compute_batch(&[
            (
                &p.operate_with_self(a).to_affine(),
                &q.operate_with_self(b).to_affine(),
            ),
            (
                &p.operate_with_self(a * b).to_affine(),
                &q.neg().to_affine(),
            ),
        ])
        .unwrap();
        assert_eq!(result, Fp12E::one());

        // e(aP, Q) = e(P, Q)^a
        let base = BN256AtePairing::compute(&p, &q).unwrap();
        let left = BN256AtePairing::compute(&p.operate_with_self(a), &q).unwrap();
        assert_eq!(left, base.pow(a));
        let right = BN256AtePairing::compute(&p, &q.operate_with_self(b)).unwrap();
        assert_eq!(right, base.pow(b));
    }

    #[test]
    fn pairing_with_the_neutral_element_is_one() {
        let p = BN256Curve::generator();
        let q = BN256TwistCurve::generator();
        let result =
            BN256AtePairing::compute_batch(&[(&p, &G2Point::neutral_element())]).unwrap();
        assert_eq!(result, Fp12E::one());
        let result =
            BN256AtePairing::compute_batch(&[(&G1Point::neutral_element(), &q)]).unwrap();
        assert_eq!(result, Fp12E::one());
    }

    #[test]
    fn pairing_rejects_points_outside_the_subgroup() {
        // a curve point of the twist that is not in the r-torsion
        let q = G2Point::new([
            Fp2E::new([FieldElement::one(), FieldElement::zero()]),
            Fp2E::new([
                FieldElement::from_hex_unchecked(
                    "84b0ba39d2b38af0a0406cf48824b6526f5f327f5ee7242a733fa6828400bf39",
                ),
                FieldElement::from_hex_unchecked(
                    "1cebc2f299b768c6613891501ecb16bd9ed74e71989fb2ec169160400cbe410",
                ),
            ]),
            Fp2E::one(),
        ]);
        assert!(q.is_on_curve());
        assert!(!q.is_in_subgroup());
        let p = BN256Curve::generator();
        assert_eq!(
            BN256AtePairing::compute(&p, &q).unwrap_err(),
            PairingError::PointNotInSubgroup
        );
    }
}
