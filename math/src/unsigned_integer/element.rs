use core::ops::{Add, BitAnd, Shl, Shr, Sub};

use crate::errors::{ByteConversionError, CreationError};
use crate::traits::ByteConversion;
use crate::unsigned_integer::traits::IsUnsignedInteger;

pub type U384 = UnsignedInteger<6>;
pub type U256 = UnsignedInteger<4>;

/// A fixed-width unsigned integer stored as `NUM_LIMBS` 64-bit limbs,
/// most significant limb first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnsignedInteger<const NUM_LIMBS: usize> {
    pub limbs: [u64; NUM_LIMBS],
}

impl<const NUM_LIMBS: usize> UnsignedInteger<NUM_LIMBS> {
    pub const fn from_limbs(limbs: [u64; NUM_LIMBS]) -> Self {
        Self { limbs }
    }

    pub const fn from_u64(value: u64) -> Self {
        let mut limbs = [0u64; NUM_LIMBS];
        limbs[NUM_LIMBS - 1] = value;
        Self { limbs }
    }

    pub const fn from_u128(value: u128) -> Self {
        let mut limbs = [0u64; NUM_LIMBS];
        limbs[NUM_LIMBS - 1] = value as u64;
        limbs[NUM_LIMBS - 2] = (value >> 64) as u64;
        Self { limbs }
    }

    const fn hex_digit(byte: u8) -> u64 {
        match byte {
            b'0'..=b'9' => (byte - b'0') as u64,
            b'a'..=b'f' => (byte - b'a' + 10) as u64,
            b'A'..=b'F' => (byte - b'A' + 10) as u64,
            _ => panic!("invalid hexadecimal digit"),
        }
    }

    /// Parses a hexadecimal string without a `0x` prefix. Panics on
    /// invalid characters; intended for hardcoded constants.
    pub const fn from_hex_unchecked(value: &str) -> Self {
        let mut limbs = [0u64; NUM_LIMBS];
        let bytes = value.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            let digit = Self::hex_digit(bytes[i]);
            let mut carry = digit;
            let mut j = NUM_LIMBS;
            while j > 0 {
                j -= 1;
                let shifted = (limbs[j] << 4) | carry;
                carry = limbs[j] >> 60;
                limbs[j] = shifted;
            }
            i += 1;
        }
        Self { limbs }
    }

    /// Checked variant of `from_hex_unchecked`.
    pub fn from_hex(value: &str) -> Result<Self, CreationError> {
        if value.is_empty() {
            return Err(CreationError::EmptyString);
        }
        if !value.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(CreationError::InvalidHexString);
        }
        if value.trim_start_matches('0').len() > NUM_LIMBS * 16 {
            return Err(CreationError::HexStringIsTooBig);
        }
        Ok(Self::from_hex_unchecked(value))
    }

    /// Addition with carry out.
    pub const fn add(a: &Self, b: &Self) -> (Self, u64) {
        let mut limbs = [0u64; NUM_LIMBS];
        let mut carry = 0u64;
        let mut i = NUM_LIMBS;
        while i > 0 {
            i -= 1;
            let (sum, overflowed) = a.limbs[i].overflowing_add(b.limbs[i]);
            let (sum, overflowed_by_carry) = sum.overflowing_add(carry);
            limbs[i] = sum;
            carry = (overflowed | overflowed_by_carry) as u64;
        }
        (Self { limbs }, carry)
    }

    /// Wrapping subtraction with borrow out.
    pub const fn sub(a: &Self, b: &Self) -> (Self, u64) {
        let mut limbs = [0u64; NUM_LIMBS];
        let mut borrow = 0u64;
        let mut i = NUM_LIMBS;
        while i > 0 {
            i -= 1;
            let (difference, underflowed) = a.limbs[i].overflowing_sub(b.limbs[i]);
            let (difference, underflowed_by_borrow) = difference.overflowing_sub(borrow);
            limbs[i] = difference;
            borrow = (underflowed | underflowed_by_borrow) as u64;
        }
        (Self { limbs }, borrow)
    }

    /// Full schoolbook product, split into its high and low halves.
    pub const fn mul(a: &Self, b: &Self) -> (Self, Self) {
        let mut hi = [0u64; NUM_LIMBS];
        let mut lo = [0u64; NUM_LIMBS];
        let mut i = 0;
        while i < NUM_LIMBS {
            let a_limb = a.limbs[NUM_LIMBS - 1 - i] as u128;
            let mut carry: u128 = 0;
            let mut j = 0;
            while j < NUM_LIMBS {
                let k = i + j;
                let current = if k < NUM_LIMBS {
                    lo[NUM_LIMBS - 1 - k]
                } else {
                    hi[2 * NUM_LIMBS - 1 - k]
                } as u128;
                let partial = a_limb * (b.limbs[NUM_LIMBS - 1 - j] as u128) + current + carry;
                if k < NUM_LIMBS {
                    lo[NUM_LIMBS - 1 - k] = partial as u64;
                } else {
                    hi[2 * NUM_LIMBS - 1 - k] = partial as u64;
                }
                carry = partial >> 64;
                j += 1;
            }
            hi[NUM_LIMBS - 1 - i] = carry as u64;
            i += 1;
        }
        (Self { limbs: hi }, Self { limbs: lo })
    }

    pub const fn shl(&self, times: usize) -> Self {
        let (limb_shift, bit_shift) = (times / 64, times % 64);
        let mut limbs = [0u64; NUM_LIMBS];
        let mut i = 0;
        while i + limb_shift < NUM_LIMBS {
            let source = i + limb_shift;
            let mut value = self.limbs[source] << bit_shift;
            if bit_shift > 0 && source + 1 < NUM_LIMBS {
                value |= self.limbs[source + 1] >> (64 - bit_shift);
            }
            limbs[i] = value;
            i += 1;
        }
        Self { limbs }
    }

    pub const fn shr(&self, times: usize) -> Self {
        let (limb_shift, bit_shift) = (times / 64, times % 64);
        let mut limbs = [0u64; NUM_LIMBS];
        let mut i = limb_shift;
        while i < NUM_LIMBS {
            let source = i - limb_shift;
            let mut value = self.limbs[source] >> bit_shift;
            if bit_shift > 0 && source > 0 {
                value |= self.limbs[source - 1] << (64 - bit_shift);
            }
            limbs[i] = value;
            i += 1;
        }
        Self { limbs }
    }

    pub const fn const_ge(a: &Self, b: &Self) -> bool {
        let mut i = 0;
        while i < NUM_LIMBS {
            if a.limbs[i] > b.limbs[i] {
                return true;
            }
            if a.limbs[i] < b.limbs[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    pub const fn is_zero(&self) -> bool {
        let mut i = 0;
        while i < NUM_LIMBS {
            if self.limbs[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Number of significant bits.
    pub const fn bits(&self) -> usize {
        let mut i = 0;
        while i < NUM_LIMBS {
            if self.limbs[i] != 0 {
                return 64 * (NUM_LIMBS - i) - self.limbs[i].leading_zeros() as usize;
            }
            i += 1;
        }
        0
    }

    /// The bit at `index`, counting from the least significant one.
    pub const fn bit(&self, index: usize) -> bool {
        let limb = NUM_LIMBS - 1 - index / 64;
        (self.limbs[limb] >> (index % 64)) & 1 == 1
    }

    /// The bit decomposition of the value, most significant bit first and
    /// without leading zeros. Zero decomposes into an empty vector.
    pub fn to_bits_be(&self) -> Vec<bool> {
        (0..self.bits()).rev().map(|index| self.bit(index)).collect()
    }

    /// Quotient and remainder of the division by `divisor`, by binary
    /// long division. Panics when `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        assert!(!divisor.is_zero(), "attempt to divide by zero");
        let mut quotient = Self::from_u64(0);
        let mut remainder = Self::from_u64(0);
        for index in (0..self.bits()).rev() {
            remainder = remainder.shl(1);
            if self.bit(index) {
                remainder.limbs[NUM_LIMBS - 1] |= 1;
            }
            if Self::const_ge(&remainder, divisor) {
                (remainder, _) = Self::sub(&remainder, divisor);
                quotient.limbs[NUM_LIMBS - 1 - index / 64] |= 1u64 << (index % 64);
            }
        }
        (quotient, remainder)
    }
}

impl<const NUM_LIMBS: usize> Add for UnsignedInteger<NUM_LIMBS> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let (result, carry) = Self::add(&self, &other);
        assert_eq!(carry, 0, "UnsignedInteger addition overflow");
        result
    }
}

impl<const NUM_LIMBS: usize> Sub for UnsignedInteger<NUM_LIMBS> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let (result, borrow) = Self::sub(&self, &other);
        assert_eq!(borrow, 0, "UnsignedInteger subtraction underflow");
        result
    }
}

impl<const NUM_LIMBS: usize> Shl<usize> for UnsignedInteger<NUM_LIMBS> {
    type Output = Self;

    fn shl(self, times: usize) -> Self {
        Self::shl(&self, times)
    }
}

impl<const NUM_LIMBS: usize> Shr<usize> for UnsignedInteger<NUM_LIMBS> {
    type Output = Self;

    fn shr(self, times: usize) -> Self {
        Self::shr(&self, times)
    }
}

impl<const NUM_LIMBS: usize> BitAnd for UnsignedInteger<NUM_LIMBS> {
    type Output = Self;

    fn bitand(self, other: Self) -> Self {
        let mut limbs = [0u64; NUM_LIMBS];
        for (limb, (a, b)) in limbs.iter_mut().zip(self.limbs.iter().zip(other.limbs.iter())) {
            *limb = a & b;
        }
        Self { limbs }
    }
}

impl<const NUM_LIMBS: usize> From<u16> for UnsignedInteger<NUM_LIMBS> {
    fn from(value: u16) -> Self {
        Self::from_u64(value as u64)
    }
}

impl<const NUM_LIMBS: usize> IsUnsignedInteger for UnsignedInteger<NUM_LIMBS> {}

impl<const NUM_LIMBS: usize> ByteConversion for UnsignedInteger<NUM_LIMBS> {
    fn to_bytes_be(&self) -> Vec<u8> {
        self.limbs.iter().flat_map(|limb| limb.to_be_bytes()).collect()
    }

    fn to_bytes_le(&self) -> Vec<u8> {
        self.limbs
            .iter()
            .rev()
            .flat_map(|limb| limb.to_le_bytes())
            .collect()
    }

    fn from_bytes_be(bytes: &[u8]) -> Result<Self, ByteConversionError> {
        if bytes.len() != NUM_LIMBS * 8 {
            return Err(ByteConversionError::FromBEBytesError);
        }
        let mut limbs = [0u64; NUM_LIMBS];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut limb_bytes = [0u8; 8];
            limb_bytes.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(limb_bytes);
        }
        Ok(Self { limbs })
    }

    fn from_bytes_le(bytes: &[u8]) -> Result<Self, ByteConversionError> {
        if bytes.len() != NUM_LIMBS * 8 {
            return Err(ByteConversionError::FromLEBytesError);
        }
        let mut limbs = [0u64; NUM_LIMBS];
        for (limb, chunk) in limbs.iter_mut().rev().zip(bytes.chunks_exact(8)) {
            let mut limb_bytes = [0u8; 8];
            limb_bytes.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(limb_bytes);
        }
        Ok(Self { limbs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_from_hex_and_u64_match() {
        assert_eq!(U256::from_hex_unchecked("1a"), U256::from_u64(26));
        assert_eq!(
            U256::from_hex_unchecked("ffffffffffffffffff"),
            U256::from_limbs([0, 0, 0xff, u64::MAX])
        );
    }

    #[test]
    fn from_hex_rejects_invalid_strings() {
        assert_eq!(U256::from_hex("").unwrap_err(), CreationError::EmptyString);
        assert_eq!(
            U256::from_hex("0x1a").unwrap_err(),
            CreationError::InvalidHexString
        );
        assert_eq!(
            U256::from_hex(&"f".repeat(65)).unwrap_err(),
            CreationError::HexStringIsTooBig
        );
        assert_eq!(U256::from_hex("1a").unwrap(), U256::from_u64(26));
    }

    #[test]
    fn addition_carries_across_limbs() {
        let a = U256::from_limbs([0, 0, 1, u64::MAX]);
        let b = U256::from_u64(1);
        let (sum, carry) = U256::add(&a, &b);
        assert_eq!(sum, U256::from_limbs([0, 0, 2, 0]));
        assert_eq!(carry, 0);

        let (_, carry) = U256::add(&U256::from_limbs([u64::MAX; 4]), &b);
        assert_eq!(carry, 1);
    }

    #[test]
    fn subtraction_borrows_across_limbs() {
        let a = U256::from_limbs([0, 0, 2, 0]);
        let b = U256::from_u64(1);
        let (difference, borrow) = U256::sub(&a, &b);
        assert_eq!(difference, U256::from_limbs([0, 0, 1, u64::MAX]));
        assert_eq!(borrow, 0);

        let (_, borrow) = U256::sub(&b, &a);
        assert_eq!(borrow, 1);
    }

    #[test]
    fn multiplication_produces_double_width_products() {
        let a = U256::from_u128(u128::MAX);
        let (hi, lo) = U256::mul(&a, &a);
        // (2^128 - 1)^2 = 2^256 - 2^129 + 1
        assert_eq!(hi, U256::from_u64(0));
        assert_eq!(lo, U256::from_limbs([u64::MAX, u64::MAX - 1, 0, 1]));

        let max = U256::from_limbs([u64::MAX; 4]);
        let (hi, lo) = U256::mul(&max, &max);
        assert_eq!(hi, U256::from_limbs([u64::MAX, u64::MAX, u64::MAX, u64::MAX - 1]));
        assert_eq!(lo, U256::from_u64(1));
    }

    #[test]
    fn shifts_move_bits_across_limbs() {
        let one = U256::from_u64(1);
        assert_eq!(one.shl(70), U256::from_limbs([0, 0, 64, 0]));
        assert_eq!(one.shl(70).shr(70), one);
        assert_eq!(one.shl(255).shr(255), one);
    }

    #[test]
    fn bit_queries_match_the_binary_expansion() {
        let value = U256::from_u64(0b1011);
        assert_eq!(value.bits(), 4);
        assert!(value.bit(0));
        assert!(value.bit(1));
        assert!(!value.bit(2));
        assert!(value.bit(3));
        assert_eq!(U256::from_u64(0).bits(), 0);
        assert_eq!(U256::from_u64(1).shl(200).bits(), 201);
    }

    #[test]
    fn bit_decomposition_of_a_known_scalar() {
        let expected = [
            1, 1, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 1, 0, 1, 1, 1,
            1, 0, 1, 0, 0, 1, 0,
        ]
        .map(|bit| bit == 1);
        assert_eq!(U256::from_u64(32498273234).to_bits_be(), expected);
    }

    #[test]
    fn division_returns_quotient_and_remainder() {
        let a = U384::from_u128(12345678901234567890);
        let b = U384::from_u64(987654321);
        let (quotient, remainder) = a.div_rem(&b);
        assert_eq!(quotient, U384::from_u64(12499999887));
        assert_eq!(remainder, U384::from_u64(339506163));

        let (quotient, remainder) = b.div_rem(&a);
        assert_eq!(quotient, U384::from_u64(0));
        assert_eq!(remainder, b);
    }

    #[test]
    fn byte_conversion_round_trips() {
        let value = U256::from_hex_unchecked(
            "8fb501e34aa387f9aa6fecb86184dc21ee5b88d120b5b59e185cac6c5e089667",
        );
        let be = value.to_bytes_be();
        let le = value.to_bytes_le();
        assert_eq!(U256::from_bytes_be(&be).unwrap(), value);
        assert_eq!(U256::from_bytes_le(&le).unwrap(), value);
        assert_eq!(be.iter().rev().cloned().collect::<Vec<_>>(), le);
        assert_eq!(
            U256::from_bytes_be(&be[1..]).unwrap_err(),
            ByteConversionError::FromBEBytesError
        );
    }
}
