//! Configuration structures and loading logic.

use crate::config::modes::VideoVariant;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub download: DownloadConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub harvest: HarvestConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,
}

/// Download pool configuration. Read-only once the pool starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Number of concurrent download workers.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Folder receiving downloaded media.
    #[serde(default = "default_download_directory")]
    pub directory: PathBuf,

    /// Skip files that already exist on disk.
    #[serde(default = "default_true")]
    pub skip_existing: bool,

    /// Which resolved variant to keep for video posts.
    #[serde(default)]
    pub video_variant: VideoVariant,

    /// Lower bound of the random pause before resolving a post.
    #[serde(default)]
    pub min_delay_ms: u64,

    /// Upper bound of the random pause before resolving a post.
    #[serde(default)]
    pub max_delay_ms: u64,

    /// Draw the progress bar.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            directory: default_download_directory(),
            skip_existing: true,
            video_variant: VideoVariant::default(),
            min_delay_ms: 0,
            max_delay_ms: 0,
            show_progress: true,
        }
    }
}

impl DownloadConfig {
    /// Random pause range applied before each resolution.
    pub fn delay_range(&self) -> RangeInclusive<u64> {
        self.min_delay_ms..=self.max_delay_ms
    }
}

/// Browser session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Saved authenticated session.
    #[serde(default = "default_session_file")]
    pub session_file: PathBuf,

    /// Raw cookies exported from a real browser.
    #[serde(default = "default_cookie_file")]
    pub cookie_file: PathBuf,

    /// Page visited by the liveness probe.
    #[serde(default = "default_home_url")]
    pub home_url: String,

    /// Element only rendered for logged-in users.
    #[serde(default = "default_probe_selector")]
    pub probe_selector: String,

    /// Seconds to wait for the probe selector.
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_file: default_session_file(),
            cookie_file: default_cookie_file(),
            home_url: default_home_url(),
            probe_selector: default_probe_selector(),
            probe_timeout_secs: default_probe_timeout(),
        }
    }
}

impl SessionConfig {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

/// Profile scrolling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Line-delimited file of discovered post URLs.
    #[serde(default = "default_links_file")]
    pub links_file: PathBuf,

    /// Run the scraping browser without a window.
    #[serde(default)]
    pub headless: bool,

    #[serde(default = "default_scroll_steps")]
    pub scroll_steps: u32,

    #[serde(default = "default_scroll_min_px")]
    pub scroll_min_px: u32,

    #[serde(default = "default_scroll_max_px")]
    pub scroll_max_px: u32,

    #[serde(default = "default_scroll_min_delay")]
    pub min_delay_ms: u64,

    #[serde(default = "default_scroll_max_delay")]
    pub max_delay_ms: u64,

    /// Pause after the profile first loads.
    #[serde(default = "default_settle_min")]
    pub settle_min_ms: u64,

    #[serde(default = "default_settle_max")]
    pub settle_max_ms: u64,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            links_file: default_links_file(),
            headless: false,
            scroll_steps: default_scroll_steps(),
            scroll_min_px: default_scroll_min_px(),
            scroll_max_px: default_scroll_max_px(),
            min_delay_ms: default_scroll_min_delay(),
            max_delay_ms: default_scroll_max_delay(),
            settle_min_ms: default_settle_min(),
            settle_max_ms: default_settle_max(),
        }
    }
}

/// Content resolver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Resolution API endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Browser user agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_resolver_timeout")]
    pub timeout_secs: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
            timeout_secs: default_resolver_timeout(),
        }
    }
}

fn default_workers() -> usize {
    4
}

fn default_download_directory() -> PathBuf {
    PathBuf::from("downloads")
}

fn default_true() -> bool {
    true
}

fn default_session_file() -> PathBuf {
    PathBuf::from("tiktok_session.json")
}

fn default_cookie_file() -> PathBuf {
    PathBuf::from("tiktok_cookies.json")
}

fn default_home_url() -> String {
    "https://www.tiktok.com/".to_string()
}

fn default_probe_selector() -> String {
    r#"a[href*="/inbox"]"#.to_string()
}

fn default_probe_timeout() -> u64 {
    5
}

fn default_links_file() -> PathBuf {
    PathBuf::from("urls.txt")
}

fn default_scroll_steps() -> u32 {
    12
}

fn default_scroll_min_px() -> u32 {
    2500
}

fn default_scroll_max_px() -> u32 {
    3500
}

fn default_scroll_min_delay() -> u64 {
    2500
}

fn default_scroll_max_delay() -> u64 {
    4500
}

fn default_settle_min() -> u64 {
    5000
}

fn default_settle_max() -> u64 {
    6000
}

fn default_endpoint() -> String {
    "https://www.tikwm.com/api/".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/144.0.0.0 Safari/537.36".to_string()
}

fn default_resolver_timeout() -> u64 {
    60
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_file() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.download.workers, 4);
        assert_eq!(config.download.directory, PathBuf::from("downloads"));
        assert!(config.download.skip_existing);
        assert_eq!(config.harvest.scroll_steps, 12);
        assert_eq!(config.harvest.links_file, PathBuf::from("urls.txt"));
        assert_eq!(config.session.probe_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_file() {
        let config: Config = toml::from_str(
            r#"
            [download]
            workers = 8
            skip_existing = false
            video_variant = "largest"

            [harvest]
            scroll_steps = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.download.workers, 8);
        assert!(!config.download.skip_existing);
        assert_eq!(config.download.video_variant, VideoVariant::Largest);
        assert_eq!(config.harvest.scroll_steps, 3);
        assert_eq!(config.harvest.scroll_max_px, 3500);
    }

    #[test]
    fn test_example_file_matches_defaults() {
        let config: Config = toml::from_str(include_str!("../../config.example.toml")).unwrap();
        let defaults = Config::default();
        assert_eq!(config.download.workers, defaults.download.workers);
        assert_eq!(config.session.probe_selector, defaults.session.probe_selector);
        assert_eq!(config.harvest.settle_max_ms, defaults.harvest.settle_max_ms);
        assert_eq!(config.resolver.user_agent, defaults.resolver.user_agent);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
