//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod hybrid_mode_control;
