//! In-memory resolver for exercising the download pool.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::DownloadConfig;
use crate::error::{Error, Result};
use crate::media::{media_item_from_locator, MediaItem};
use crate::post::{PostKind, PostReference};
use crate::resolver::ContentResolver;

enum Response {
    Items(Vec<MediaItem>),
    Error(String),
    Panic,
}

/// Resolves registered URLs and "transfers" by writing the locator as the
/// file body.
#[derive(Default)]
pub struct FakeResolver {
    responses: HashMap<String, Response>,
    failing_locators: HashSet<String>,
    latency: Option<Duration>,
    transfers: Mutex<Vec<PathBuf>>,
    resolutions: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(self, url: &str, locators: &[&str]) -> Self {
        let kind = PostKind::classify(url).unwrap_or(PostKind::Video);
        let items = locators
            .iter()
            .enumerate()
            .map(|(i, l)| media_item_from_locator(i + 1, l.to_string(), kind, None))
            .collect();
        self.with_media(url, items)
    }

    pub fn with_media(mut self, url: &str, items: Vec<MediaItem>) -> Self {
        self.responses.insert(url.to_string(), Response::Items(items));
        self
    }

    pub fn with_error(mut self, url: &str, message: &str) -> Self {
        self.responses
            .insert(url.to_string(), Response::Error(message.to_string()));
        self
    }

    pub fn with_panic(mut self, url: &str) -> Self {
        self.responses.insert(url.to_string(), Response::Panic);
        self
    }

    pub fn failing_transfer(mut self, locator: &str) -> Self {
        self.failing_locators.insert(locator.to_string());
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Destinations written so far, in call order.
    pub fn transfers(&self) -> Vec<PathBuf> {
        self.transfers.lock().unwrap().clone()
    }

    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::SeqCst)
    }

    /// Highest number of resolutions observed running at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentResolver for FakeResolver {
    async fn resolve(&self, post: &PostReference) -> Result<Vec<MediaItem>> {
        self.resolutions.fetch_add(1, Ordering::SeqCst);
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.responses.get(&post.url) {
            Some(Response::Items(items)) => Ok(items.clone()),
            Some(Response::Error(message)) => Err(Error::Resolve(message.clone())),
            Some(Response::Panic) => panic!("resolver exploded on {}", post.url),
            None => Ok(Vec::new()),
        }
    }

    async fn transfer(&self, item: &MediaItem, dest: &Path) -> Result<u64> {
        if self.failing_locators.contains(&item.locator) {
            return Err(Error::Transfer("HTTP 403".to_string()));
        }
        tokio::fs::write(dest, item.locator.as_bytes()).await?;
        self.transfers.lock().unwrap().push(dest.to_path_buf());
        Ok(item.locator.len() as u64)
    }
}

/// Pool configuration writing into `dir`, without pauses or progress bar.
pub fn test_config(dir: &Path) -> DownloadConfig {
    DownloadConfig {
        workers: 2,
        directory: dir.to_path_buf(),
        show_progress: false,
        ..DownloadConfig::default()
    }
}
