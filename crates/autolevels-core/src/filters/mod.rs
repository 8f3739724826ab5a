pub mod curve;
pub mod histogram;
