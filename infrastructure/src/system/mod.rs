//! Operating system adapters.

mod restart;

pub use restart::CommandRestart;
