/// Generic Jacobian projective points.
pub mod point;
/// Curves in short Weierstrass form.
pub mod short_weierstrass;
/// Common behaviour for elliptic curves and pairings.
pub mod traits;
