//! Core types and trait definitions for the phonebook.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The store backend and the web layer both depend on it.

pub mod contact;
pub mod error;
pub mod outcome;
pub mod store;
pub mod validate;

pub use contact::Contact;
pub use error::{ValidationError, Result};
