//! Interactive terminal prompts

pub mod confirmation;
