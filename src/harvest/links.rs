//! Post link filtering and the line-delimited link file.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::Result;
use regex::Regex;

static POST_LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://(www\.)?tiktok\.com/@[\w.-]+/(video|photo)/\d+$").unwrap()
});

/// Whether a link is a well-formed post URL.
pub fn is_post_link(href: &str) -> bool {
    POST_LINK_PATTERN.is_match(href)
}

/// Keep the well-formed post links, deduplicated and sorted. Anything else
/// (ads, sounds, hashtags, relative links) is noise and is dropped.
pub fn collect_post_links<I, S>(hrefs: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    hrefs
        .into_iter()
        .map(|h| h.as_ref().trim().to_string())
        .filter(|h| is_post_link(h))
        .collect()
}

/// Overwrite the link file with one URL per line.
pub fn write_link_file(path: &Path, links: &BTreeSet<String>) -> Result<()> {
    let mut content = String::new();
    for link in links {
        content.push_str(link);
        content.push('\n');
    }
    fs::write(path, content)?;
    Ok(())
}

/// Read the link file, trimming lines and skipping blanks.
pub fn read_link_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}
