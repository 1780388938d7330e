//! Configuration module for tiktok-fetch.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Recency window and video variant modes
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, DownloadConfig, HarvestConfig, ResolverConfig, SessionConfig};
pub use modes::{RecencyWindow, VideoVariant};
pub use validation::validate_config;
