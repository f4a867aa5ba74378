use crate::unsigned_integer::traits::IsUnsignedInteger;

pub trait IsGroup: Clone + PartialEq + Eq {
    /// Returns the neutral element of the group. The equality
    /// `neutral_element().operate_with(g) == g` must hold
    /// for every group element `g`.
    fn neutral_element() -> Self;

    fn is_neutral_element(&self) -> bool {
        self == &Self::neutral_element()
    }

    /// Applies the group operation `exponent` times with itself, with a
    /// double-and-operate ladder over the scalar bits, most significant
    /// bit first. The zero scalar gives the neutral element and the
    /// leading doublings of the neutral accumulator are short-circuited
    /// by `operate_with`.
    fn operate_with_self<T: IsUnsignedInteger>(&self, exponent: T) -> Self {
        let zero = T::from(0u16);
        let one = T::from(1u16);
        let mut bits = Vec::new();
        let mut exponent = exponent;
        while exponent > zero {
            bits.push(exponent & one == one);
            exponent = exponent >> 1_usize;
        }
        let mut result = Self::neutral_element();
        for bit in bits.iter().rev() {
            result = result.operate_with(&result);
            if *bit {
                result = result.operate_with(self);
            }
        }
        result
    }

    /// Applies the group operation between `self` and `other`.
    fn operate_with(&self, other: &Self) -> Self;

    /// Returns the inverse of `self` under the group operation.
    fn neg(&self) -> Self;
}
