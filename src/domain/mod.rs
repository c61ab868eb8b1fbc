//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! its name and its phone numbers. These value objects validate at
//! construction time and prevent invalid data from being represented in
//! the system.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::Name;
pub use phone::{Phone, PHONE_DIGITS};
