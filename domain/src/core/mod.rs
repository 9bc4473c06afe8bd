//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: parse and validation errors

pub mod error;
