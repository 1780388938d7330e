//! Media module for item representation and parsing.

pub mod item;
pub mod parser;

pub use item::MediaItem;
pub use parser::{extract_extension_from_url, media_item_from_locator, select_video_item};
