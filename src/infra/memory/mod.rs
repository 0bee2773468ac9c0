pub mod preferences;
pub mod seed;
pub mod source;
