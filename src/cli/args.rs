//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, RecencyWindow};

/// TikTok profile harvester and downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "tiktok-fetch",
    version,
    about = "Harvest post links from a TikTok profile and download their media",
    long_about = "Scrolls a creator's profile in a logged-in browser session, saves every \
                  video and photo post link it finds, then downloads the most recent posts \
                  concurrently.\n\n\
                  Re-running is safe: files already on disk are skipped."
)]
pub struct Args {
    /// Profile URL, e.g. https://www.tiktok.com/@username
    #[arg(value_name = "PROFILE_URL")]
    pub profile_url: String,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Folder receiving downloaded media.
    #[arg(short = 'd', long = "directory", env = "TIKTOK_FETCH_DIR")]
    pub download_directory: Option<PathBuf>,

    /// Number of concurrent download workers.
    #[arg(short, long, env = "TIKTOK_FETCH_WORKERS")]
    pub workers: Option<usize>,

    /// Download only the latest N posts (all, 10, 25, 50, 75, 100).
    /// Skips the interactive prompt.
    #[arg(long, value_name = "WINDOW")]
    pub latest: Option<RecencyWindow>,

    /// Download files even when they already exist.
    #[arg(long)]
    pub no_skip_existing: bool,

    /// File receiving the harvested post links.
    #[arg(long)]
    pub links_file: Option<PathBuf>,

    /// Scrape without a browser window.
    #[arg(long)]
    pub headless: bool,

    /// Skip session check and harvesting; download from the existing links file.
    #[arg(long)]
    pub from_links: bool,

    /// Hide download progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.download_directory {
            config.download.directory = dir.clone();
        }

        if let Some(workers) = self.workers {
            config.download.workers = workers;
        }

        if let Some(links_file) = &self.links_file {
            config.harvest.links_file = links_file.clone();
        }

        // Boolean flags (only override if set to non-default)
        if self.no_skip_existing {
            config.download.skip_existing = false;
        }

        if self.headless {
            config.harvest.headless = true;
        }

        if self.quiet {
            config.download.show_progress = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: &str = "https://www.tiktok.com/@alice";

    #[test]
    fn test_profile_url_required() {
        assert!(Args::try_parse_from(["tiktok-fetch"]).is_err());
    }

    #[test]
    fn test_merge_overrides() {
        let args = Args::try_parse_from([
            "tiktok-fetch",
            PROFILE,
            "-d",
            "out",
            "-w",
            "8",
            "--links-file",
            "alice.txt",
            "--no-skip-existing",
            "--headless",
            "--quiet",
        ])
        .unwrap();

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.download.directory, PathBuf::from("out"));
        assert_eq!(config.download.workers, 8);
        assert_eq!(config.harvest.links_file, PathBuf::from("alice.txt"));
        assert!(!config.download.skip_existing);
        assert!(config.harvest.headless);
        assert!(!config.download.show_progress);
    }

    #[test]
    fn test_merge_keeps_file_values() {
        let args = Args::try_parse_from(["tiktok-fetch", PROFILE]).unwrap();

        let mut config = Config::default();
        config.download.workers = 12;
        config.harvest.headless = true;
        args.merge_into_config(&mut config);

        assert_eq!(config.download.workers, 12);
        assert!(config.harvest.headless);
        assert!(config.download.skip_existing);
        assert_eq!(args.config, PathBuf::from("config.toml"));
    }

    #[test]
    fn test_latest_window() {
        let args = Args::try_parse_from(["tiktok-fetch", PROFILE, "--latest", "25"]).unwrap();
        assert_eq!(args.latest, Some(RecencyWindow::Latest(25)));

        let args = Args::try_parse_from(["tiktok-fetch", PROFILE, "--latest", "all"]).unwrap();
        assert_eq!(args.latest, Some(RecencyWindow::All));

        assert!(Args::try_parse_from(["tiktok-fetch", PROFILE, "--latest", "30"]).is_err());
    }
}
