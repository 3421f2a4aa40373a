//! # Quill Core
//!
//! The domain layer of the Quill post service.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod filter;
pub mod ports;
pub mod slug;
pub mod validate;

pub use error::RepoError;
