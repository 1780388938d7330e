//! Per-post reporting and run statistics.

use console::style;
use indicatif::ProgressBar;

use crate::download::{DownloadTask, FetchOutcome, ItemOutcome, RunSummary};
use crate::output::progress::print_through;

/// Render the console lines describing one finished post.
pub fn format_outcome_lines(task: &DownloadTask, outcome: &FetchOutcome) -> Vec<String> {
    let label = task.label();
    let url = &task.reference.url;

    match outcome {
        FetchOutcome::Completed { kind, items } => items
            .iter()
            .map(|item| match item {
                ItemOutcome::Saved { path, bytes } => format!(
                    "{} {} {} saved: {} ({} bytes)",
                    style("OK").green().bold(),
                    label,
                    kind,
                    path.display(),
                    bytes
                ),
                ItemOutcome::Skipped { path } => format!(
                    "{} {} Already exists: {}",
                    style("SKIP").blue().bold(),
                    label,
                    path.display()
                ),
                ItemOutcome::Failed { file_name, error } => format!(
                    "{} {} Failed to download {}: {}",
                    style("ERROR").red().bold(),
                    label,
                    file_name,
                    error
                ),
            })
            .collect(),
        FetchOutcome::NoMedia { kind } => vec![format!(
            "{} {} No {} found: {}",
            style("WARN").yellow().bold(),
            label,
            kind,
            url
        )],
        FetchOutcome::UnknownLink => vec![format!(
            "{} {} Unknown link type, skipping: {}",
            style("WARN").yellow().bold(),
            label,
            url
        )],
        FetchOutcome::Failed { error } => vec![format!(
            "{} {} Error processing {}: {}",
            style("ERROR").red().bold(),
            label,
            url,
            error
        )],
    }
}

/// Print one post's outcome through the pool's progress bar.
pub fn report_outcome(bar: &ProgressBar, task: &DownloadTask, outcome: &FetchOutcome) {
    for line in format_outcome_lines(task, outcome) {
        print_through(bar, &line);
    }
}

/// Report a worker whose result could not be collected.
pub fn report_worker_lost(bar: &ProgressBar, error: &str) {
    let line = format!("{} Worker lost: {}", style("ERROR").red().bold(), error);
    print_through(bar, &line);
}

/// Print statistics for the whole run.
pub fn print_run_summary(summary: &RunSummary) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Run Summary:").bold());
    println!("  Posts:      {}", summary.posts);
    println!("  Videos:     {}", style(summary.videos_saved).green());
    println!("  Photos:     {}", style(summary.photos_saved).green());
    println!("  Skipped:    {} (already on disk)", style(summary.skipped).yellow());
    if summary.no_media > 0 {
        println!("  No media:   {}", summary.no_media);
    }
    if summary.unknown_links > 0 {
        println!("  Unknown:    {}", summary.unknown_links);
    }
    if summary.has_failures() {
        println!(
            "  Failed:     {} item(s), {} post(s)",
            style(summary.failed_items).red(),
            style(summary.failed_posts).red()
        );
    }
    println!(
        "  Total:      {} saved ({} bytes)",
        summary.total_saved(),
        summary.bytes_saved
    );
    println!("{}", style("═".repeat(50)).dim());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::PostKind;

    fn task() -> DownloadTask {
        let urls = [
            "https://www.tiktok.com/@alice/video/1",
            "https://www.tiktok.com/@alice/photo/7123456789012345678",
        ];
        DownloadTask::from_urls(&urls).remove(1)
    }

    fn plain(lines: Vec<String>) -> Vec<String> {
        lines
            .into_iter()
            .map(|l| console::strip_ansi_codes(&l).into_owned())
            .collect()
    }

    #[test]
    fn test_item_lines_carry_label() {
        let outcome = FetchOutcome::Completed {
            kind: PostKind::Photo,
            items: vec![
                ItemOutcome::Saved {
                    path: "downloads/a_1.jpg".into(),
                    bytes: 12,
                },
                ItemOutcome::Skipped {
                    path: "downloads/a_2.jpg".into(),
                },
                ItemOutcome::Failed {
                    file_name: "a_3.jpg".into(),
                    error: "HTTP 403".into(),
                },
            ],
        };

        let lines = plain(format_outcome_lines(&task(), &outcome));
        assert_eq!(
            lines,
            [
                "OK [2/2] photo saved: downloads/a_1.jpg (12 bytes)",
                "SKIP [2/2] Already exists: downloads/a_2.jpg",
                "ERROR [2/2] Failed to download a_3.jpg: HTTP 403",
            ]
        );
    }

    #[test]
    fn test_post_level_lines() {
        let url = "https://www.tiktok.com/@alice/photo/7123456789012345678";

        let lines = plain(format_outcome_lines(
            &task(),
            &FetchOutcome::NoMedia {
                kind: PostKind::Photo,
            },
        ));
        assert_eq!(lines, [format!("WARN [2/2] No photo found: {}", url)]);

        let lines = plain(format_outcome_lines(&task(), &FetchOutcome::UnknownLink));
        assert_eq!(
            lines,
            [format!("WARN [2/2] Unknown link type, skipping: {}", url)]
        );

        let lines = plain(format_outcome_lines(
            &task(),
            &FetchOutcome::Failed {
                error: "boom".into(),
            },
        ));
        assert_eq!(lines, [format!("ERROR [2/2] Error processing {}: boom", url)]);
    }

    #[test]
    fn test_empty_completion_prints_nothing() {
        let outcome = FetchOutcome::Completed {
            kind: PostKind::Video,
            items: Vec::new(),
        };
        assert!(format_outcome_lines(&task(), &outcome).is_empty());
    }
}
