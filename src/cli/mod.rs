//! Command-line interface.

pub mod args;
pub mod prompt;

pub use args::Args;
pub use prompt::{prompt_recency_window, read_recency_window};
