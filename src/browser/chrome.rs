//! Chrome automation via the DevTools protocol.

use std::sync::Arc;
use std::time::Duration;

use headless_chrome::protocol::cdp::Network::CookieParam;
use headless_chrome::{Browser, LaunchOptions, Tab};

use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::harvest::ProfilePage;
use crate::session::{SessionProbe, SessionState};

/// How long Chrome may stay silent before the connection is dropped.
const IDLE_TIMEOUT: Duration = Duration::from_secs(180);

const POST_ANCHOR_SCRIPT: &str = r#"JSON.stringify(Array.from(document.querySelectorAll('a[href*="/video/"], a[href*="/photo/"]')).map(a => a.href))"#;

/// Launch Chrome with a single tab carrying the session cookies.
#[tracing::instrument(skip(session))]
fn launch(headless: bool, session: &SessionState) -> Result<(Browser, Arc<Tab>)> {
    let options = LaunchOptions::default_builder()
        .headless(headless)
        .window_size(Some((1280, 900)))
        .idle_browser_timeout(IDLE_TIMEOUT)
        .build()
        .map_err(|e| Error::Browser(format!("Invalid launch options: {}", e)))?;

    let browser = Browser::new(options)?;
    let tab = browser.new_tab()?;

    let cookies = cookie_params(session)?;
    if !cookies.is_empty() {
        tab.set_cookies(cookies)?;
    }

    Ok((browser, tab))
}

/// Convert stored cookies into DevTools cookie parameters.
fn cookie_params(session: &SessionState) -> Result<Vec<CookieParam>> {
    session
        .cookies
        .iter()
        .map(|cookie| {
            let mut param = serde_json::json!({
                "name": cookie.name,
                "value": cookie.value,
                "domain": cookie.domain,
                "path": cookie.path,
                "secure": cookie.secure,
                "httpOnly": cookie.http_only,
                "sameSite": cookie.same_site.to_string(),
            });
            // Negative expiry marks a session cookie, which DevTools expresses by omission
            if cookie.expires >= 0.0 {
                param["expires"] = serde_json::json!(cookie.expires);
            }
            Ok(serde_json::from_value(param)?)
        })
        .collect()
}

/// An authenticated Chrome tab used to scroll a profile.
///
/// Dropping the page closes the browser.
pub struct ChromePage {
    _browser: Browser,
    tab: Arc<Tab>,
}

impl ChromePage {
    /// Open a browser window logged in with `session`.
    pub fn launch(headless: bool, session: &SessionState) -> Result<Self> {
        let (browser, tab) = launch(headless, session)?;
        Ok(Self {
            _browser: browser,
            tab,
        })
    }
}

impl ProfilePage for ChromePage {
    fn open(&mut self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?.wait_until_navigated()?;
        Ok(())
    }

    fn scroll_by(&mut self, pixels: u32) -> Result<()> {
        self.tab
            .evaluate(&format!("window.scrollBy(0, {})", pixels), false)?;
        Ok(())
    }

    fn post_links(&mut self) -> Result<Vec<String>> {
        let result = self.tab.evaluate(POST_ANCHOR_SCRIPT, false)?;
        match result.value {
            Some(serde_json::Value::String(json)) => Ok(serde_json::from_str(&json)?),
            other => Err(Error::Browser(format!(
                "Unexpected anchor query result: {:?}",
                other
            ))),
        }
    }
}

/// Checks a session by looking for a logged-in-only element on the home page.
#[derive(Debug, Clone)]
pub struct ChromeProbe {
    home_url: String,
    selector: String,
    timeout: Duration,
}

impl ChromeProbe {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            home_url: config.home_url.clone(),
            selector: config.probe_selector.clone(),
            timeout: config.probe_timeout(),
        }
    }
}

impl SessionProbe for ChromeProbe {
    fn is_alive(&self, session: &SessionState) -> Result<bool> {
        let (_browser, tab) = launch(true, session)?;
        tab.navigate_to(&self.home_url)?.wait_until_navigated()?;

        match tab.wait_for_element_with_custom_timeout(&self.selector, self.timeout) {
            Ok(_) => Ok(true),
            Err(e) => {
                tracing::debug!("Probe selector '{}' not found: {}", self.selector, e);
                Ok(false)
            }
        }
    }
}
