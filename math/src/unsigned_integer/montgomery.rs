use crate::unsigned_integer::element::UnsignedInteger;

pub struct MontgomeryAlgorithms;

impl MontgomeryAlgorithms {
    /// Montgomery multiplication by Coarsely Integrated Operand Scanning
    /// (CIOS): returns `a * b * R^{-1} mod q`, where `R = 2^{64 * NUM_LIMBS}`
    /// and `mu = -q^{-1} mod 2^{64}`.
    ///
    /// Works for any odd modulus that fits the limbs, including moduli
    /// with the top bit set; the intermediate accumulator keeps two extra
    /// limbs and a single final conditional subtraction canonicalizes
    /// the result.
    pub const fn cios<const NUM_LIMBS: usize>(
        a: &UnsignedInteger<NUM_LIMBS>,
        b: &UnsignedInteger<NUM_LIMBS>,
        q: &UnsignedInteger<NUM_LIMBS>,
        mu: &u64,
    ) -> UnsignedInteger<NUM_LIMBS> {
        // accumulator, least significant limb first, with two extra limbs
        let mut t = [0u64; NUM_LIMBS];
        let mut t_extra = [0u64; 2];

        let mut i = 0;
        while i < NUM_LIMBS {
            let b_limb = b.limbs[NUM_LIMBS - 1 - i] as u128;

            let mut carry: u128 = 0;
            let mut j = 0;
            while j < NUM_LIMBS {
                let partial = t[j] as u128 + (a.limbs[NUM_LIMBS - 1 - j] as u128) * b_limb + carry;
                t[j] = partial as u64;
                carry = partial >> 64;
                j += 1;
            }
            let partial = t_extra[0] as u128 + carry;
            t_extra[0] = partial as u64;
            t_extra[1] = (partial >> 64) as u64;

            let m = (t[0].wrapping_mul(*mu)) as u128;

            let partial = t[0] as u128 + m * (q.limbs[NUM_LIMBS - 1] as u128);
            let mut carry = partial >> 64;
            let mut j = 1;
            while j < NUM_LIMBS {
                let partial = t[j] as u128 + m * (q.limbs[NUM_LIMBS - 1 - j] as u128) + carry;
                t[j - 1] = partial as u64;
                carry = partial >> 64;
                j += 1;
            }
            let partial = t_extra[0] as u128 + carry;
            t[NUM_LIMBS - 1] = partial as u64;
            t_extra[0] = t_extra[1] + (partial >> 64) as u64;

            i += 1;
        }

        let mut limbs = [0u64; NUM_LIMBS];
        let mut j = 0;
        while j < NUM_LIMBS {
            limbs[NUM_LIMBS - 1 - j] = t[j];
            j += 1;
        }
        let mut result = UnsignedInteger { limbs };
        if t_extra[0] > 0 || UnsignedInteger::const_ge(&result, q) {
            // when the extra limb is set the subtraction wraps, which is
            // exactly the reduction modulo 2^{64 * NUM_LIMBS}
            let (reduced, _) = UnsignedInteger::sub(&result, q);
            result = reduced;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unsigned_integer::element::U256;

    // Modulus of the BN256 base field; its top bit is set, which is the
    // interesting case for the extra accumulator limbs.
    const Q: U256 = U256::from_hex_unchecked(
        "8fb501e34aa387f9aa6fecb86184dc21ee5b88d120b5b59e185cac6c5e089667",
    );
    const MU: u64 = 0x2387f9007f17daa9;

    #[test]
    fn multiplying_by_r_squared_and_by_one_round_trips() {
        // R2 = 2^512 mod q
        let r_squared = U256::from_hex_unchecked(
            "7c36e0e62c2380b70c6dc37b80fb1651409ed151b2efb0c29c21c3ff7e444f56",
        );
        let value = U256::from_u64(987654321);
        let montgomery_form = MontgomeryAlgorithms::cios(&value, &r_squared, &Q, &MU);
        let recovered = MontgomeryAlgorithms::cios(&montgomery_form, &U256::from_u64(1), &Q, &MU);
        assert_eq!(recovered, value);
    }

    #[test]
    fn products_match_a_known_vector() {
        // 2^255 * 3 * R^{-1} mod q, computed with an independent
        // implementation.
        let a = U256::from_hex_unchecked(
            "8000000000000000000000000000000000000000000000000000000000000000",
        );
        let b = U256::from_u64(3);
        let expected = U256::from_hex_unchecked(
            "47da80f1a551c3fcd537f65c30c26e10f72dc468905adacf0c2e56362f044b35",
        );
        assert_eq!(MontgomeryAlgorithms::cios(&a, &b, &Q, &MU), expected);
    }
}
