mod error;
pub mod employee;
pub mod notification;
pub mod roster;
pub mod session;

pub use error::{AuthError, ValidationError};
