//! Data models for the contact book.
//!
//! This module contains the contact record aggregate.

pub mod record;

pub use record::Record;
