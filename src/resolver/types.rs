//! API response type definitions.

use serde::Deserialize;

/// Envelope returned by every tikwm call.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    /// Left untyped: failures send `[]` or `null` here.
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Resolved post details.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostData {
    #[serde(default)]
    pub id: String,
    /// Watermark-free video.
    pub play: Option<String>,
    /// High-definition video, when requested and available.
    pub hdplay: Option<String>,
    pub size: Option<u64>,
    pub hd_size: Option<u64>,
    /// Slideshow images for photo-mode posts.
    #[serde(default)]
    pub images: Vec<String>,
}
