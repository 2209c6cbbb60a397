//! Command-line interface.

pub mod interact;

mod commands;

pub use commands::{is_verbose, run};
