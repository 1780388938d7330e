//! Content resolution module.
//!
//! This module provides:
//! - The `ContentResolver` seam between the download pool and the network
//! - An HTTP resolver backed by the tikwm API
//! - API response types

pub mod client;
pub mod types;

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;
use crate::media::MediaItem;
use crate::post::PostReference;

pub use client::TikwmResolver;

/// Maps a post onto downloadable media and moves their bytes to disk.
#[async_trait]
pub trait ContentResolver: Send + Sync {
    /// Resolve a post into its media items, in resolver order.
    ///
    /// An empty list means the post has nothing downloadable (deleted,
    /// private or region-locked), which is not an error.
    async fn resolve(&self, post: &PostReference) -> Result<Vec<MediaItem>>;

    /// Transfer one item to `dest`, returning the number of bytes written.
    async fn transfer(&self, item: &MediaItem, dest: &Path) -> Result<u64>;
}
