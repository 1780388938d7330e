//! Profile link harvesting.
//!
//! Scrolls a creator's profile, keeps the anchors that point at posts and
//! writes them to the links file the download phase reads back.

pub mod harvester;
pub mod links;

pub use harvester::{LinkHarvester, ProfilePage, ScrollPolicy};
pub use links::{collect_post_links, is_post_link, read_link_file, write_link_file};
