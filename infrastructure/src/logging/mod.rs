//! Structured transition journal.
//!
//! Provides [`JsonlTransitionLogger`], a JSONL file writer that implements
//! the [`TransitionLogger`](hybridctl_application::TransitionLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlTransitionLogger;
