//! Hybrid graphics mode subdomain.
//!
//! - [`state`]: requested/persisted mode and the integrated-GPU sub-mode
//! - [`capability`]: probe result and the control kind it selects
//! - [`transition`]: one change request and how it ended
//! - [`error`]: feature read/write failures
//! - [`classifier`]: failure to warning mapping

pub mod capability;
pub mod classifier;
pub mod error;
pub mod state;
pub mod transition;
