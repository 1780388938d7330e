//! Media item representation.

/// One downloadable asset resolved from a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// 1-based position in resolver order.
    pub sequence_index: usize,

    /// File extension (without dot).
    pub extension: String,

    /// Remote location of the asset.
    pub locator: String,

    /// Size in bytes, when the resolver reports one.
    pub size: Option<u64>,
}

impl MediaItem {
    pub fn new(sequence_index: usize, locator: String, extension: String) -> Self {
        Self {
            sequence_index,
            extension,
            locator,
            size: None,
        }
    }

    pub fn with_size(mut self, size: Option<u64>) -> Self {
        self.size = size;
        self
    }
}
