//! Units of work submitted to the download pool.

use std::collections::HashSet;

use crate::post::PostReference;

/// One post queued for download.
///
/// `ordinal` and `total` only label progress output; they say nothing about
/// completion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    pub reference: PostReference,
    pub ordinal: usize,
    pub total: usize,
}

impl DownloadTask {
    /// Number a list of URLs in submission order, starting at 1.
    ///
    /// At most one task is built per post, so no two tasks ever write the
    /// same file.
    pub fn from_urls<S: AsRef<str>>(urls: &[S]) -> Vec<DownloadTask> {
        let mut seen = HashSet::new();
        let references: Vec<PostReference> = urls
            .iter()
            .map(|url| PostReference::from_url(url.as_ref()))
            .filter(|reference| seen.insert(reference.key()))
            .collect();

        let total = references.len();
        references
            .into_iter()
            .enumerate()
            .map(|(i, reference)| DownloadTask {
                reference,
                ordinal: i + 1,
                total,
            })
            .collect()
    }

    /// Progress prefix such as `[3/10]`.
    pub fn label(&self) -> String {
        format!("[{}/{}]", self.ordinal, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_urls() {
        let tasks = DownloadTask::from_urls(&[
            "https://www.tiktok.com/@a/video/2",
            "https://www.tiktok.com/@a/photo/1",
        ]);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].ordinal, 1);
        assert_eq!(tasks[1].ordinal, 2);
        assert!(tasks.iter().all(|t| t.total == 2));
        assert_eq!(tasks[1].reference.content_id, "1");
        assert_eq!(tasks[1].label(), "[2/2]");
    }

    #[test]
    fn test_from_urls_builds_one_task_per_post() {
        let tasks = DownloadTask::from_urls(&[
            "https://www.tiktok.com/@a/video/2",
            "https://tiktok.com/@a/video/2",
            "https://www.tiktok.com/@a/photo/1",
            "https://www.tiktok.com/@a/video/2",
        ]);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].reference.url, "https://www.tiktok.com/@a/video/2");
        assert_eq!(tasks[1].label(), "[2/2]");
    }
}
