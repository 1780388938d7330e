//! Media parsing utilities.

use crate::config::VideoVariant;
use crate::media::item::MediaItem;
use crate::post::PostKind;

/// Build a media item, taking the extension from the locator when it has one.
pub fn media_item_from_locator(
    sequence_index: usize,
    locator: String,
    kind: PostKind,
    size: Option<u64>,
) -> MediaItem {
    let extension = extract_extension_from_url(&locator)
        .unwrap_or_else(|| kind.default_extension().to_string());
    MediaItem::new(sequence_index, locator, extension).with_size(size)
}

/// Pick the video item to download according to the variant policy.
pub fn select_video_item(items: &[MediaItem], variant: VideoVariant) -> Option<&MediaItem> {
    match variant {
        VideoVariant::First => items.first(),
        VideoVariant::Largest => items
            .iter()
            .filter(|item| item.size.is_some())
            // max_by_key keeps the last maximum; reverse so ties favour resolver order
            .rev()
            .max_by_key(|item| item.size)
            .or_else(|| items.first()),
    }
}

/// Extract extension from URL path.
pub fn extract_extension_from_url(url: &str) -> Option<String> {
    // Remove query string and fragment
    let path = url.split(['?', '#']).next()?;

    // Drop the scheme and host so a bare domain is not read as an extension
    let path = match path.split_once("://") {
        Some((_, rest)) => rest.split_once('/').map(|(_, p)| p).unwrap_or(""),
        None => path,
    };

    // Get the last segment
    let filename = path.rsplit('/').next()?;

    // Get extension
    let (stem, ext) = filename.rsplit_once('.')?;

    // Validate it looks like an extension (1-10 chars, alphanumeric)
    if !stem.is_empty()
        && !ext.is_empty()
        && ext.len() <= 10
        && ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        Some(ext.to_lowercase())
    } else {
        None
    }
}
