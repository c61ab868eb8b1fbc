//! The contact directory.
//!
//! A keyed, insertion-ordered collection of records exposing only
//! add/find/delete and iteration.

pub mod contact_directory;

pub use contact_directory::{Directory, Iter};
