//! Scroll-driven post link discovery.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::path::Path;
use std::thread::sleep;
use std::time::Duration;

use indicatif::ProgressBar;
use rand::Rng;

use crate::config::HarvestConfig;
use crate::error::Result;
use crate::harvest::links::{collect_post_links, write_link_file};
use crate::output::{print_info, print_success, print_warning};
use crate::post::extract_username;

/// A profile page that reveals more posts as it is scrolled.
pub trait ProfilePage {
    /// Navigate to the profile.
    fn open(&mut self, url: &str) -> Result<()>;

    /// Advance the viewport by `pixels`.
    fn scroll_by(&mut self, pixels: u32) -> Result<()>;

    /// Every anchor target currently on the page that points at a post.
    fn post_links(&mut self) -> Result<Vec<String>>;
}

/// Bounded scrolling effort.
///
/// A fixed step count, not a "no new posts" check: profiles with more posts
/// than the steps reveal are silently truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollPolicy {
    pub steps: u32,
    /// Pixels per step.
    pub distance: RangeInclusive<u32>,
    /// Pause after each step, in milliseconds.
    pub delay: RangeInclusive<u64>,
    /// Pause after the page first loads, in milliseconds.
    pub settle: RangeInclusive<u64>,
}

impl Default for ScrollPolicy {
    fn default() -> Self {
        Self::from_config(&HarvestConfig::default())
    }
}

impl ScrollPolicy {
    pub fn from_config(config: &HarvestConfig) -> Self {
        Self {
            steps: config.scroll_steps,
            distance: config.scroll_min_px..=config.scroll_max_px,
            delay: config.min_delay_ms..=config.max_delay_ms,
            settle: config.settle_min_ms..=config.settle_max_ms,
        }
    }

    /// Policy without pauses, for pages that render synchronously.
    pub fn immediate(steps: u32) -> Self {
        Self {
            steps,
            distance: 3000..=3000,
            delay: 0..=0,
            settle: 0..=0,
        }
    }
}

/// Pick a value from an inclusive range, tolerating an inverted one.
fn random_in<T>(range: &RangeInclusive<T>) -> T
where
    T: Copy + PartialOrd + rand::distributions::uniform::SampleUniform,
{
    let (start, end) = (*range.start(), *range.end());
    if start >= end {
        return start;
    }
    rand::thread_rng().gen_range(start..=end)
}

fn pause(range: &RangeInclusive<u64>) {
    let ms = random_in(range);
    if ms > 0 {
        sleep(Duration::from_millis(ms));
    }
}

/// Collects post links from a creator's profile.
pub struct LinkHarvester<P> {
    page: P,
    policy: ScrollPolicy,
    progress: ProgressBar,
}

impl<P: ProfilePage> LinkHarvester<P> {
    pub fn new(page: P, policy: ScrollPolicy) -> Self {
        Self {
            page,
            policy,
            progress: ProgressBar::hidden(),
        }
    }

    /// Report scrolling through `progress`.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Give back the page, e.g. to close its browser.
    pub fn into_page(self) -> P {
        self.page
    }

    /// Scroll the profile and return the distinct post links it revealed.
    ///
    /// Fails with `InvalidProfileUrl` before touching the page when the URL
    /// is not a profile. A failing scroll step ends scrolling early; links
    /// revealed so far are still collected.
    pub fn harvest(&mut self, profile_url: &str) -> Result<BTreeSet<String>> {
        let username = extract_username(profile_url)?;
        print_info(&format!("Scraping profile: @{}", username));

        let links = self.scroll_and_collect(profile_url);
        self.progress.finish_and_clear();
        links
    }

    fn scroll_and_collect(&mut self, profile_url: &str) -> Result<BTreeSet<String>> {
        self.page.open(profile_url)?;
        pause(&self.policy.settle);

        let steps = self.policy.steps;
        for step in 1..=steps {
            let pixels = random_in(&self.policy.distance);
            self.progress
                .set_message(format!("Scrolling... ({}/{})", step, steps));
            tracing::debug!("Scroll step {}/{}: {}px", step, steps, pixels);

            if let Err(e) = self.page.scroll_by(pixels) {
                print_warning(&format!(
                    "Scrolling stopped at step {}/{}: {}",
                    step, steps, e
                ));
                break;
            }
            pause(&self.policy.delay);
        }

        self.progress.set_message("Collecting links...");
        let hrefs = self.page.post_links()?;
        let found = hrefs.len();
        let links = collect_post_links(hrefs);

        tracing::debug!("Kept {} of {} post anchors", links.len(), found);
        Ok(links)
    }

    /// Harvest and persist the links as the handoff file.
    pub fn harvest_to_file(&mut self, profile_url: &str, path: &Path) -> Result<BTreeSet<String>> {
        let links = self.harvest(profile_url)?;
        write_link_file(path, &links)?;
        print_success(&format!(
            "{} links saved to '{}'",
            links.len(),
            path.display()
        ));
        Ok(links)
    }
}
