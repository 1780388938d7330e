//! tiktok-fetch - harvest a TikTok creator's post links and download their media.
//!
//! The pipeline runs in two strictly sequential phases:
//!
//! - A logged-in browser scrolls the creator's profile and writes every
//!   video and photo post link it finds to a links file.
//! - The most recent links are resolved through a third-party resolver and
//!   downloaded by a bounded pool of workers, each post isolated from the
//!   others.
//!
//! # Features
//!
//! - Session reuse with regeneration from exported browser cookies
//! - Recency selection from the creation time embedded in post IDs
//! - Deterministic file names, so re-runs skip what is already on disk
//! - Photo slideshows saved one file per image
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tiktok_fetch::{download, harvest, Config, DownloadTask, TikwmResolver};
//!
//! #[tokio::main]
//! async fn main() -> tiktok_fetch::Result<()> {
//!     let config = Config::default();
//!     let urls = harvest::read_link_file(&config.harvest.links_file)?;
//!     let latest = download::select(&urls, Some(10));
//!
//!     let resolver = Arc::new(TikwmResolver::new(&config.resolver)?);
//!     let summary = download::run(
//!         DownloadTask::from_urls(&latest),
//!         Arc::new(config.download.clone()),
//!         resolver,
//!     )
//!     .await?;
//!     println!("{} files saved", summary.total_saved());
//!     Ok(())
//! }
//! ```

pub mod browser;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod harvest;
pub mod media;
pub mod output;
pub mod post;
pub mod resolver;
pub mod session;

// Re-exports for convenience
pub use config::{Config, RecencyWindow};
pub use download::{DownloadTask, FetchOutcome, ItemOutcome, RunSummary};
pub use error::{Error, Result};
pub use media::MediaItem;
pub use post::{PostKind, PostReference};
pub use resolver::{ContentResolver, TikwmResolver};
