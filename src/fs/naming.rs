//! Filename generation and manipulation.

use std::path::{Path, PathBuf};

/// Suffix of a file that is still being written.
const PARTIAL_SUFFIX: &str = ".part";

/// Replace every character outside `[A-Za-z0-9._-]` with `_`.
///
/// Total and idempotent: the output only contains allowed characters.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '.' | '_' | '-' => c,
            _ => '_',
        })
        .collect()
}

/// Build the output filename for one media item of a post.
///
/// `sequence` is only given for posts resolving to more than one item, so a
/// single-item post keeps the plain `{user}_{id}_{time}.{ext}` form.
pub fn media_filename(
    username: &str,
    content_id: &str,
    rendered_time: &str,
    sequence: Option<usize>,
    extension: &str,
) -> String {
    let base = format!("{}_{}_{}", username, content_id, rendered_time);
    let name = match sequence {
        Some(index) => format!("{}_{}.{}", base, index, extension),
        None => format!("{}.{}", base, extension),
    };
    sanitize_filename(&name)
}

/// Path a transfer writes to before it is renamed onto `path`.
pub fn partial_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(PARTIAL_SUFFIX);
    path.with_file_name(name)
}
