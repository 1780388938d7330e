//! Per-post media fetching.
//!
//! Every function here returns a `FetchOutcome` instead of an error: a
//! failure belongs to its own post (or item) and must never reach the pool.

use std::path::PathBuf;
use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;

use crate::config::DownloadConfig;
use crate::download::state::{FetchOutcome, ItemOutcome};
use crate::download::task::DownloadTask;
use crate::fs::{download_path, media_filename};
use crate::media::{select_video_item, MediaItem};
use crate::post::{render_timestamp, PostKind, PostReference};
use crate::resolver::ContentResolver;

/// Fetch a post, dispatching on its URL shape.
pub async fn fetch_post(
    resolver: &dyn ContentResolver,
    config: &DownloadConfig,
    task: &DownloadTask,
) -> FetchOutcome {
    match task.reference.kind {
        Some(PostKind::Video) => fetch_video(resolver, config, task).await,
        Some(PostKind::Photo) => fetch_photo(resolver, config, task).await,
        None => FetchOutcome::UnknownLink,
    }
}

/// Fetch a video post: one file, chosen by the configured variant.
pub async fn fetch_video(
    resolver: &dyn ContentResolver,
    config: &DownloadConfig,
    task: &DownloadTask,
) -> FetchOutcome {
    let post = &task.reference;
    let items = match resolve(resolver, config, post).await {
        Ok(items) => items,
        Err(outcome) => return outcome,
    };

    let Some(item) = select_video_item(&items, config.video_variant) else {
        return FetchOutcome::NoMedia {
            kind: PostKind::Video,
        };
    };

    let file_name = file_name_for(post, None, item);
    let outcome = save_item(resolver, config, item, file_name).await;

    FetchOutcome::Completed {
        kind: PostKind::Video,
        items: vec![outcome],
    }
}

/// Fetch a photo post: every slideshow image, each attempted independently.
pub async fn fetch_photo(
    resolver: &dyn ContentResolver,
    config: &DownloadConfig,
    task: &DownloadTask,
) -> FetchOutcome {
    let post = &task.reference;
    let items = match resolve(resolver, config, post).await {
        Ok(items) => items,
        Err(outcome) => return outcome,
    };

    if items.is_empty() {
        return FetchOutcome::NoMedia {
            kind: PostKind::Photo,
        };
    }

    let numbered = items.len() > 1;
    let mut outcomes = Vec::with_capacity(items.len());
    for item in &items {
        let sequence = numbered.then_some(item.sequence_index);
        let file_name = file_name_for(post, sequence, item);
        outcomes.push(save_item(resolver, config, item, file_name).await);
    }

    FetchOutcome::Completed {
        kind: PostKind::Photo,
        items: outcomes,
    }
}

/// Resolve a post after the configured random pause.
async fn resolve(
    resolver: &dyn ContentResolver,
    config: &DownloadConfig,
    post: &PostReference,
) -> std::result::Result<Vec<MediaItem>, FetchOutcome> {
    let delay_ms = jitter_ms(config);
    if delay_ms > 0 {
        sleep(Duration::from_millis(delay_ms)).await;
    }

    resolver.resolve(post).await.map_err(|e| {
        tracing::debug!("Failed to resolve {}: {}", post.url, e);
        FetchOutcome::Failed {
            error: e.to_string(),
        }
    })
}

fn jitter_ms(config: &DownloadConfig) -> u64 {
    let range = config.delay_range();
    if range.start() >= range.end() {
        return *range.start();
    }
    rand::thread_rng().gen_range(range)
}

fn file_name_for(post: &PostReference, sequence: Option<usize>, item: &MediaItem) -> String {
    media_filename(
        &post.username,
        &post.content_id,
        &render_timestamp(post.created_at),
        sequence,
        &item.extension,
    )
}

/// Apply the skip-existing policy, then transfer one item.
async fn save_item(
    resolver: &dyn ContentResolver,
    config: &DownloadConfig,
    item: &MediaItem,
    file_name: String,
) -> ItemOutcome {
    let path: PathBuf = download_path(&config.directory, &file_name);

    if config.skip_existing && tokio::fs::try_exists(&path).await.unwrap_or(false) {
        tracing::debug!("Skipping existing file: {}", path.display());
        return ItemOutcome::Skipped { path };
    }

    match resolver.transfer(item, &path).await {
        Ok(bytes) => ItemOutcome::Saved { path, bytes },
        Err(e) => {
            tracing::debug!("Failed to transfer {}: {}", item.locator, e);
            ItemOutcome::Failed {
                file_name,
                error: e.to_string(),
            }
        }
    }
}
