//! Creation time recovered from snowflake-style post identifiers.
//!
//! TikTok stores a 32-bit Unix timestamp in the high bits of every post ID,
//! so the creation time can be read without asking the platform.

use chrono::{TimeZone, Utc};

/// Seconds since the Unix epoch.
pub type UnixTimestamp = u64;

/// Rendered in place of a timestamp that cannot be formatted.
pub const UNKNOWN_TIME: &str = "unknown_time";

/// Number of low bits below the embedded timestamp.
const TIMESTAMP_SHIFT: u32 = 32;

/// Last second that still renders as a four-digit year (9999-12-31T23:59:59Z).
const MAX_RENDERABLE: UnixTimestamp = 253_402_300_799;

/// Derive the creation timestamp from a post's content ID.
///
/// Returns `0` when the ID is not an unsigned integer, including digit
/// strings too large for `u64`. Such posts therefore rank as the oldest,
/// not the newest as an arbitrary-precision shift would place them.
/// Callers must read `0` as "unknown", never as a real date.
pub fn derive_timestamp(content_id: &str) -> UnixTimestamp {
    content_id
        .parse::<u64>()
        .map(|id| id >> TIMESTAMP_SHIFT)
        .unwrap_or(0)
}

/// Render a timestamp as a sortable `YYYYMMDD_HHMMSS` string in UTC.
pub fn render_timestamp(ts: UnixTimestamp) -> String {
    if ts > MAX_RENDERABLE {
        return UNKNOWN_TIME.to_string();
    }

    match Utc.timestamp_opt(ts as i64, 0).single() {
        Some(dt) => dt.format("%Y%m%d_%H%M%S").to_string(),
        None => UNKNOWN_TIME.to_string(),
    }
}
