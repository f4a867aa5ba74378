use super::{
    curve::{BN254Curve, BN254_X},
    field_extension::{
        mul_fp2_by_fp, mul_fp6_by_fp2, mul_fp6_by_tau, BN254PrimeField, Degree12ExtensionField,
        Fp12E, Fp2E, Fp6E,
    },
    twist::BN254TwistCurve,
};
use crate::{
    cyclic_group::IsGroup,
    elliptic_curve::{
        short_weierstrass::point::ShortWeierstrassJacobianPoint, traits::IsPairing,
    },
    errors::PairingError,
    field::element::FieldElement,
};

type FpE = FieldElement<BN254PrimeField>;
type G1Point = ShortWeierstrassJacobianPoint<BN254Curve>;
type G2Point = ShortWeierstrassJacobianPoint<BN254TwistCurve>;

/// The ate loop parameter 6x + 2.
pub const SIX_X_PLUS_TWO: u128 = 6 * (BN254_X as u128) + 2;

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
    FpE::from_hex_unchecked("1284b71c2865a7dfe8b99fdd76e68b605c521e08292f2176d60b35dadcc9e470"),
    FpE::from_hex_unchecked("246996f3b4fae7e6a6327cfe12150b8e747992778eeec7e5ca5cf05f80f362ac"),
]);

pub const GAMMA_12: Fp2E = Fp2E::const_from_raw([
    FpE::from_hex_unchecked("2fb347984f7911f74c0bec3cf559b143b78cc310c2c3330c99e39557176f553d"),
    FpE::from_hex_unchecked("16c9e55061ebae204ba4cc8bd75a079432ae2a1d0b7c9dce1665d51c640fcba2"),
]);

pub const GAMMA_13: Fp2E = Fp2E::const_from_raw([
    FpE::from_hex_unchecked("63cf305489af5dcdc5ec698b6e2f9b9dbaae0eda9c95998dc54014671a0135a"),
    FpE::from_hex_unchecked("7c03cbcac41049a0704b5a7ec796f2b21807dc98fa25bd282d37f632623b0e3"),
]);

pub const GAMMA_14: Fp2E = Fp2E::const_from_raw([
    FpE::from_hex_unchecked("5b54f5e64eea80180f3c0b75a181e84d33365f7be94ec72848a1f55921ea762"),
    FpE::from_hex_unchecked("2c145edbe7fd8aee9f3a80b03b0b1c923685d2ea1bdec763c13b4711cd2b8126"),
]);

pub const GAMMA_15: Fp2E = Fp2E::const_from_raw([
    FpE::from_hex_unchecked("183c1e74f798649e93a3661a4353ff4425c459b55aa1bd32ea2c810eab7692f"),
    FpE::from_hex_unchecked("12acf2ca76fd0675a27fb246c7729f7db080cb99678e2ac024c6b8ee6e0c2c4b"),
]);

/// GAMMA_2i = GAMMA_1i · conj(GAMMA_1i); these lie in the base field.
pub const GAMMA_21: FpE =
    FpE::from_hex_unchecked("30644e72e131a0295e6dd9e7e0acccb0c28f069fbb966e3de4bd44e5607cfd49");

pub const GAMMA_22: FpE =
    FpE::from_hex_unchecked("30644e72e131a0295e6dd9e7e0acccb0c28f069fbb966e3de4bd44e5607cfd48");

pub const GAMMA_23: FpE =
    FpE::from_hex_unchecked("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd46");

pub const GAMMA_24: FpE =
    FpE::from_hex_unchecked("59e26bcea0d48bacd4f263f1acdb5c4f5763473177fffffe");

pub const GAMMA_25: FpE =
    FpE::from_hex_unchecked("59e26bcea0d48bacd4f263f1acdb5c4f5763473177ffffff");

#[derive(Clone)]
pub struct BN254AtePairing;

impl IsPairing for BN254AtePairing {
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

/// Doubling step of the Miller loop; see the BN256 module for the
/// provenance of the formulas.
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

/// Mixed addition step of the Miller loop. `q` must be affine and
/// `q_y_square` must hold `q.y²`.
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
/// `(a·τ + b)·ω + c`.
fn mul_by_line(f: &Fp12E, a: &Fp2E, b: &Fp2E, c: &Fp2E) -> Fp12E {
    let [f0, f1] = f.value();
    let t1 = Fp6E::new([b.clone(), a.clone(), Fp2E::zero()]) * f1;
    let t2 = Fp6E::new([b + c, a.clone(), Fp2E::zero()]);
    let t3 = mul_fp6_by_fp2(f0, c);
    let new_f1 = (f1 + f0) * t2 - &t1 - &t3;
    let new_f0 = t3 + mul_fp6_by_tau(&t1);
    Fp12E::new([new_f0, new_f1])
}

/// The Miller loop of the optimal ate pairing over the non-adjacent
/// form of 6x + 2, closed by the two Frobenius correction lines. Both
/// inputs must be affine.
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

/// Raises the Miller output to (p¹² - 1)/r with the addition chain of
/// Algorithm 31 from ePrint 2010/354.
pub fn final_exponentiation(f: &Fp12E) -> Result<Fp12E, PairingError> {
    let f_inverse = f.inv().map_err(|_| PairingError::DivisionByZero)?;
    let mut t1 = f.conjugate() * f_inverse;
    t1 = frobenius_square(&t1) * &t1;

    let fp1 = frobenius(&t1);
    let fp2 = frobenius_square(&t1);
    let fp3 = frobenius(&fp2);

    let fu1 = t1.pow(BN254_X);
    let fu2 = fu1.pow(BN254_X);
    let fu3 = fu2.pow(BN254_X);

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
