use crate::field::element::FieldElement;
use crate::field::errors::FieldError;
use crate::field::traits::IsField;
use core::fmt::Debug;
use core::marker::PhantomData;

/// Trait to fix a cubic non residue. Used to construct a cubic extension
/// field by adding a cube root `t` of `residue()`.
pub trait HasCubicNonResidue<F: IsField> {
    fn residue() -> FieldElement<F>;
}

/// A general cubic extension field over `F` with cubic non residue
/// `Q::residue()`. An element `c0 + c1·t + c2·t²` is stored as
/// `[c0, c1, c2]`.
#[derive(Debug, Clone)]
pub struct CubicExtensionField<F, Q> {
    field: PhantomData<F>,
    non_residue: PhantomData<Q>,
}

pub type CubicExtensionFieldElement<F, Q> = FieldElement<CubicExtensionField<F, Q>>;

impl<F, Q> IsField for CubicExtensionField<F, Q>
where
    F: IsField,
    Q: Clone + Debug + HasCubicNonResidue<F>,
{
    type BaseType = [FieldElement<F>; 3];

    /// Returns the component wise addition of `a` and `b`.
    fn add(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        [&a[0] + &b[0], &a[1] + &b[1], &a[2] + &b[2]]
    }

    /// Karatsuba multiplication with three base field products
    /// (Algorithm 13 of ePrint 2010/354).
    fn mul(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        let v0 = &a[0] * &b[0];
        let v1 = &a[1] * &b[1];
        let v2 = &a[2] * &b[2];
        [
            Q::residue() * ((&a[1] + &a[2]) * (&b[1] + &b[2]) - &v1 - &v2) + &v0,
            (&a[0] + &a[1]) * (&b[0] + &b[1]) - &v0 - &v1 + Q::residue() * &v2,
            (&a[0] + &a[2]) * (&b[0] + &b[2]) - &v0 + &v1 - &v2,
        ]
    }

    /// Squaring with five base field products (Algorithm 16 of
    /// ePrint 2010/354).
    fn square(a: &Self::BaseType) -> Self::BaseType {
        let double_c1 = a[1].double();
        let t0 = &a[0] * &double_c1;
        let t1 = a[2].square();
        let c1 = Q::residue() * &t1 + &t0;
        let t2 = t0 - t1;
        let t3 = a[0].square();
        let t4 = (&a[2] + &a[0] - &a[1]).square();
        let t5 = &double_c1 * &a[2];
        let c0 = Q::residue() * &t5 + &t3;
        let c2 = t2 + t4 + t5 - t3;
        [c0, c1, c2]
    }

    /// Returns the component wise subtraction of `a` and `b`.
    fn sub(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        [&a[0] - &b[0], &a[1] - &b[1], &a[2] - &b[2]]
    }

    /// Returns the component wise negation of `a`.
    fn neg(a: &Self::BaseType) -> Self::BaseType {
        [-&a[0], -&a[1], -&a[2]]
    }

    /// Returns the multiplicative inverse of `a` through the cubic norm
    /// (Algorithm 17 of ePrint 2010/354).
    fn inv(a: &Self::BaseType) -> Result<Self::BaseType, FieldError> {
        let t0 = a[0].square();
        let t1 = a[1].square();
        let t2 = a[2].square();
        let t3 = &a[0] * &a[1];
        let t4 = &a[0] * &a[2];
        let t5 = &a[1] * &a[2];
        let c0 = t0 - Q::residue() * &t5;
        let c1 = Q::residue() * &t2 - &t3;
        let c2 = &t1 - &t4;
        let norm_inv = (&a[0] * &c0 + Q::residue() * (&a[2] * &c1 + &a[1] * &c2)).inv()?;
        Ok([&c0 * &norm_inv, &c1 * &norm_inv, &c2 * &norm_inv])
    }

    /// Returns the additive neutral element of the field extension.
    fn zero() -> Self::BaseType {
        [FieldElement::zero(), FieldElement::zero(), FieldElement::zero()]
    }

    /// Returns the multiplicative neutral element of the field extension.
    fn one() -> Self::BaseType {
        [FieldElement::one(), FieldElement::zero(), FieldElement::zero()]
    }

    fn from_u64(x: u64) -> Self::BaseType {
        [FieldElement::from(x), FieldElement::zero(), FieldElement::zero()]
    }

    /// The components already have the correct internal representation,
    /// so this is the identity.
    fn from_base_type(x: Self::BaseType) -> Self::BaseType {
        x
    }
}
