//! Recency ranking of the harvested work queue.

use std::collections::HashSet;

use crate::post::{derive_timestamp, extract_content_id, PostReference, UnixTimestamp};

/// Creation time of a post URL; `0` when the URL carries no usable ID.
pub fn timestamp_from_url(url: &str) -> UnixTimestamp {
    extract_content_id(url).map(derive_timestamp).unwrap_or(0)
}

/// Drop URLs naming a post already seen, keeping the first occurrence.
pub fn dedup_posts<S: AsRef<str>>(urls: &[S]) -> Vec<&str> {
    let mut seen = HashSet::new();
    urls.iter()
        .map(|url| url.as_ref().trim())
        .filter(|url| seen.insert(PostReference::from_url(url).key()))
        .collect()
}

/// Order URLs newest first and keep at most `limit` of them.
///
/// Duplicate posts are dropped first. The sort is stable, so posts with
/// equal timestamps keep their input order. URLs without a usable ID rank
/// as the oldest rather than being dropped.
pub fn select<S: AsRef<str>>(urls: &[S], limit: Option<usize>) -> Vec<String> {
    let mut ranked: Vec<(&str, UnixTimestamp)> = dedup_posts(urls)
        .into_iter()
        .map(|url| (url, timestamp_from_url(url)))
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let keep = limit.unwrap_or(ranked.len());
    ranked
        .into_iter()
        .take(keep)
        .map(|(url, _)| url.to_string())
        .collect()
}
