pub mod applications;
pub mod error;
pub mod extractors;
