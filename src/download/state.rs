//! Download outcomes and run statistics.

use std::path::PathBuf;

use crate::post::PostKind;

/// What happened to one media item of a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Transferred to `path`.
    Saved { path: PathBuf, bytes: u64 },
    /// Already on disk and skip-existing is on.
    Skipped { path: PathBuf },
    /// The transfer failed; siblings were still attempted.
    Failed { file_name: String, error: String },
}

/// What happened to one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Resolved; each item carries its own result.
    Completed {
        kind: PostKind,
        items: Vec<ItemOutcome>,
    },
    /// The resolver found nothing to download.
    NoMedia { kind: PostKind },
    /// The URL is neither a video nor a photo link.
    UnknownLink,
    /// Resolution failed, or the worker died.
    Failed { error: String },
}

/// Per-run statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub posts: u64,
    pub videos_saved: u64,
    pub photos_saved: u64,
    pub bytes_saved: u64,
    pub skipped: u64,
    pub no_media: u64,
    pub unknown_links: u64,
    pub failed_items: u64,
    pub failed_posts: u64,
}

impl RunSummary {
    /// Fold one post's outcome into the totals.
    pub fn record(&mut self, outcome: &FetchOutcome) {
        self.posts += 1;
        match outcome {
            FetchOutcome::Completed { kind, items } => {
                for item in items {
                    match item {
                        ItemOutcome::Saved { bytes, .. } => {
                            match kind {
                                PostKind::Video => self.videos_saved += 1,
                                PostKind::Photo => self.photos_saved += 1,
                            }
                            self.bytes_saved += bytes;
                        }
                        ItemOutcome::Skipped { .. } => self.skipped += 1,
                        ItemOutcome::Failed { .. } => self.failed_items += 1,
                    }
                }
            }
            FetchOutcome::NoMedia { .. } => self.no_media += 1,
            FetchOutcome::UnknownLink => self.unknown_links += 1,
            FetchOutcome::Failed { .. } => self.failed_posts += 1,
        }
    }

    /// Files written this run.
    pub fn total_saved(&self) -> u64 {
        self.videos_saved + self.photos_saved
    }

    /// Whether anything failed, at post or item level.
    pub fn has_failures(&self) -> bool {
        self.failed_items > 0 || self.failed_posts > 0
    }
}
