pub mod applications;
pub mod error;
pub mod home;

mod layout;

pub use error::ViewError;
