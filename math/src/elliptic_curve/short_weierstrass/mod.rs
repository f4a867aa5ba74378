/// Implementation of particular cases of elliptic curves.
pub mod curves;
/// Errors of the byte-level boundary of the curves.
pub mod errors;
/// Jacobian points on short Weierstrass curves and their group law.
pub mod point;
/// Common behaviour for short Weierstrass curves.
pub mod traits;
