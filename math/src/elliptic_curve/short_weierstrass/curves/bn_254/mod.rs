pub mod curve;
pub mod default_types;
pub mod field_extension;
pub mod pairing;
pub mod twist;
