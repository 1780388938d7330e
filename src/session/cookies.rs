//! Raw browser cookie import.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Cookie `SameSite` policy accepted by the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    /// Clamp an arbitrary exported value onto a policy the browser accepts.
    ///
    /// Extension exports use `no_restriction` for `None` and `unspecified`
    /// when unset; everything unrecognised becomes `Lax`.
    pub fn clamp(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("strict") => SameSite::Strict,
            Some("none") | Some("no_restriction") => SameSite::None,
            _ => SameSite::Lax,
        }
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SameSite::Strict => write!(f, "Strict"),
            SameSite::Lax => write!(f, "Lax"),
            SameSite::None => write!(f, "None"),
        }
    }
}

/// A normalised cookie, as stored in the session file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    #[serde(default = "default_path")]
    pub path: String,
    /// Unix seconds; `-1` marks a session cookie.
    #[serde(default = "default_expires")]
    pub expires: f64,
    #[serde(default)]
    pub http_only: bool,
    #[serde(default = "default_true")]
    pub secure: bool,
    #[serde(default)]
    pub same_site: SameSite,
}

/// A cookie as exported by a browser or extension.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCookie {
    name: String,
    value: String,
    domain: String,
    path: Option<String>,
    #[serde(alias = "expirationDate")]
    expires: Option<f64>,
    http_only: Option<bool>,
    secure: Option<bool>,
    same_site: Option<String>,
}

impl From<RawCookie> for SessionCookie {
    fn from(raw: RawCookie) -> Self {
        Self {
            name: raw.name,
            value: raw.value,
            domain: raw.domain,
            path: raw.path.unwrap_or_else(default_path),
            expires: raw.expires.unwrap_or_else(default_expires),
            http_only: raw.http_only.unwrap_or(false),
            secure: raw.secure.unwrap_or(true),
            same_site: SameSite::clamp(raw.same_site.as_deref()),
        }
    }
}

fn default_path() -> String {
    "/".to_string()
}

fn default_expires() -> f64 {
    -1.0
}

fn default_true() -> bool {
    true
}

/// Parse a JSON array of exported cookies.
pub fn parse_raw_cookies(json: &str) -> Result<Vec<SessionCookie>> {
    let raw: Vec<RawCookie> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(SessionCookie::from).collect())
}

/// Load and normalise the raw cookie file.
pub fn import_cookies(path: &Path) -> Result<Vec<SessionCookie>> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::MissingCookieFile(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;

    parse_raw_cookies(&content)
}
