//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod capability_probe;
pub mod confirmation;
pub mod hybrid_mode_feature;
pub mod presenter;
pub mod restart;
pub mod transition_logger;
