//! Post identity: references parsed from URLs and the creation time
//! embedded in their numeric identifiers.

pub mod clock;
pub mod reference;

pub use clock::{derive_timestamp, render_timestamp, UnixTimestamp, UNKNOWN_TIME};
pub use reference::{extract_content_id, extract_username, PostKey, PostKind, PostReference};
