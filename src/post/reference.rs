//! Post references parsed from TikTok URLs.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::fs::sanitize_filename;
use crate::post::clock::{derive_timestamp, UnixTimestamp};

/// Fallback for a username or content ID missing from a URL.
const UNKNOWN: &str = "unknown";

static PROFILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"tiktok\.com/@([a-zA-Z0-9_.]+)").unwrap());

static HANDLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/@([^/]+)").unwrap());

static CONTENT_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(video|photo)/(\d+)").unwrap());

/// Kind of post, classified by URL shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostKind {
    Video,
    Photo,
}

impl PostKind {
    /// Classify a URL by its path shape. Video wins when both markers occur.
    pub fn classify(url: &str) -> Option<Self> {
        if url.contains("/video/") {
            Some(PostKind::Video)
        } else if url.contains("/photo/") {
            Some(PostKind::Photo)
        } else {
            None
        }
    }

    /// Extension used when the resolved locator carries none.
    pub fn default_extension(&self) -> &'static str {
        match self {
            PostKind::Video => "mp4",
            PostKind::Photo => "jpg",
        }
    }
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostKind::Video => write!(f, "video"),
            PostKind::Photo => write!(f, "photo"),
        }
    }
}

/// What makes two post references the same download.
///
/// Media posts compare by the parts their file names are built from, so
/// `tiktok.com` and `www.tiktok.com` links to one post collide. Links of
/// unknown shape compare by URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PostKey {
    Media {
        kind: PostKind,
        username: String,
        content_id: String,
    },
    Link(String),
}

/// A discovered post, identified by its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostReference {
    pub url: String,
    pub username: String,
    pub content_id: String,
    /// `None` when the URL is neither a video nor a photo link.
    pub kind: Option<PostKind>,
    /// Derived from `content_id`; `0` means unknown.
    pub created_at: UnixTimestamp,
}

impl PostReference {
    /// Build a reference from a post URL. Never fails: missing parts fall
    /// back to `"unknown"` and an unrecognised shape leaves `kind` empty.
    pub fn from_url(url: &str) -> Self {
        let url = url.trim();

        let username = HANDLE_PATTERN
            .captures(url)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| UNKNOWN.to_string());

        let kind = PostKind::classify(url);
        let content_id = content_id_for(url, kind).unwrap_or_else(|| UNKNOWN.to_string());
        let created_at = derive_timestamp(&content_id);

        Self {
            url: url.to_string(),
            username,
            content_id,
            kind,
            created_at,
        }
    }

    /// Identity used to keep one task per output file.
    pub fn key(&self) -> PostKey {
        match self.kind {
            Some(kind) => PostKey::Media {
                kind,
                username: sanitize_filename(&self.username),
                content_id: self.content_id.clone(),
            },
            None => PostKey::Link(self.url.clone()),
        }
    }
}

/// Extract the numeric content ID matching the post kind.
fn content_id_for(url: &str, kind: Option<PostKind>) -> Option<String> {
    let wanted = match kind {
        Some(PostKind::Video) => "video",
        Some(PostKind::Photo) => "photo",
        None => return None,
    };

    CONTENT_ID_PATTERN
        .captures_iter(url)
        .find(|c| c.get(1).map(|m| m.as_str()) == Some(wanted))
        .and_then(|c| c.get(2))
        .map(|m| m.as_str().to_string())
}

/// Extract the content ID of any post URL, video or photo.
pub fn extract_content_id(url: &str) -> Option<&str> {
    CONTENT_ID_PATTERN
        .captures(url)
        .and_then(|c| c.get(2))
        .map(|m| m.as_str())
}

/// Extract the creator handle from a profile URL.
pub fn extract_username(profile_url: &str) -> Result<String> {
    PROFILE_PATTERN
        .captures(profile_url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::InvalidProfileUrl(profile_url.to_string()))
}
