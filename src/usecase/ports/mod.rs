pub mod preferences;
pub mod source;
