//! Filesystem module.
//!
//! Provides:
//! - Download folder management
//! - Deterministic filename generation

pub mod naming;
pub mod paths;

pub use naming::{media_filename, partial_path, sanitize_filename};
pub use paths::{download_path, ensure_dir};
