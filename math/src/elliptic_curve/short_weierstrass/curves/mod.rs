pub mod bn_254;
pub mod bn_256;
