pub mod error;
pub mod media;
