//! Download module for fetching harvested posts.
//!
//! This module provides:
//! - Recency selection over harvested links
//! - Per-post fetching (videos and photo slideshows)
//! - The bounded-concurrency worker pool
//! - Outcome and statistics tracking

pub mod fetcher;
pub mod orchestrator;
pub mod selector;
pub mod state;
pub mod task;

#[cfg(test)]
pub(crate) mod testing;

pub use fetcher::{fetch_photo, fetch_post, fetch_video};
pub use orchestrator::run;
pub use selector::{dedup_posts, select, timestamp_from_url};
pub use state::{FetchOutcome, ItemOutcome, RunSummary};
pub use task::DownloadTask;
