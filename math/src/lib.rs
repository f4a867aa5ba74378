pub mod cyclic_group;
pub mod elliptic_curve;
pub mod errors;
pub mod field;
pub mod traits;
pub mod unsigned_integer;
