//! Browser automation module.
//!
//! Provides a Chrome-backed profile page for harvesting and the session
//! liveness probe.

pub mod chrome;

pub use chrome::{ChromePage, ChromeProbe};
