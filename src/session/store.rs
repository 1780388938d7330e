//! Saved browser session and its validation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::output::{print_success, print_warning};
use crate::session::cookies::{import_cookies, SessionCookie};

/// Authenticated browser state, shaped like a browser storage-state file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub cookies: Vec<SessionCookie>,

    /// Per-origin storage; carried through untouched.
    #[serde(default)]
    pub origins: Vec<serde_json::Value>,
}

impl SessionState {
    pub fn from_cookies(cookies: Vec<SessionCookie>) -> Self {
        Self {
            cookies,
            origins: Vec::new(),
        }
    }
}

/// Handle to the session file on disk.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the saved session.
    pub fn load(&self) -> Result<SessionState> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overwrite the saved session.
    pub fn save(&self, state: &SessionState) -> Result<()> {
        let content = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Checks whether a session is still logged in.
pub trait SessionProbe {
    fn is_alive(&self, session: &SessionState) -> Result<bool>;
}

/// Return a usable session, regenerating it from the raw cookie file when the
/// saved one is missing, unreadable or no longer logged in.
///
/// Fails only when regeneration is needed and the cookie file is unusable.
pub fn ensure_session(
    store: &SessionStore,
    cookie_file: &Path,
    probe: &dyn SessionProbe,
) -> Result<SessionState> {
    match load_live_session(store, probe) {
        Ok(session) => {
            print_success("Valid TikTok session found.");
            return Ok(session);
        }
        Err(e) => tracing::debug!("{}", e),
    }

    print_warning("Session invalid or expired. Reloading cookies...");
    let session = SessionState::from_cookies(import_cookies(cookie_file)?);
    store.save(&session)?;
    print_success(&format!(
        "{} cookies imported and session saved to {}",
        session.cookies.len(),
        store.path().display()
    ));

    Ok(session)
}

/// Load the saved session and confirm it is still logged in.
///
/// Every reason to regenerate is reported as `SessionInvalid`.
fn load_live_session(store: &SessionStore, probe: &dyn SessionProbe) -> Result<SessionState> {
    if !store.exists() {
        return Err(Error::SessionInvalid(format!(
            "no saved session at {}",
            store.path().display()
        )));
    }

    let session = store.load().map_err(|e| {
        Error::SessionInvalid(format!("cannot read {}: {}", store.path().display(), e))
    })?;

    match probe.is_alive(&session) {
        Ok(true) => Ok(session),
        Ok(false) => Err(Error::SessionInvalid("no longer logged in".to_string())),
        Err(e) => Err(Error::SessionInvalid(format!("probe failed: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FixedProbe {
        answer: Result<bool>,
        calls: Cell<usize>,
    }

    impl FixedProbe {
        fn new(answer: Result<bool>) -> Self {
            Self {
                answer,
                calls: Cell::new(0),
            }
        }
    }

    impl SessionProbe for FixedProbe {
        fn is_alive(&self, _session: &SessionState) -> Result<bool> {
            self.calls.set(self.calls.get() + 1);
            match &self.answer {
                Ok(alive) => Ok(*alive),
                Err(e) => Err(Error::Browser(e.to_string())),
            }
        }
    }

    const RAW: &str = r#"[{"name":"sessionid","value":"fresh","domain":".tiktok.com","sameSite":"weird"}]"#;

    fn saved_session(value: &str) -> SessionState {
        SessionState::from_cookies(
            crate::session::cookies::parse_raw_cookies(&format!(
                r#"[{{"name":"sessionid","value":"{}","domain":".tiktok.com"}}]"#,
                value
            ))
            .unwrap(),
        )
    }

    #[test]
    fn test_live_session_is_kept() {
        let tmp = tempfile::tempdir().unwrap();
        let store = SessionStore::new(tmp.path().join("session.json"));
        store.save(&saved_session("old")).unwrap();

        let probe = FixedProbe::new(Ok(true));
        let session = ensure_session(&store, &tmp.path().join("missing.json"), &probe).unwrap();

        assert_eq!(session.cookies[0].value, "old");
        assert_eq!(probe.calls.get(), 1);
    }

    #[test]
    fn test_stale_session_is_regenerated() {
        let tmp = tempfile::tempdir().unwrap();
        let store = SessionStore::new(tmp.path().join("session.json"));
        store.save(&saved_session("old")).unwrap();
        let cookie_file = tmp.path().join("cookies.json");
        fs::write(&cookie_file, RAW).unwrap();

        let probe = FixedProbe::new(Ok(false));
        let session = ensure_session(&store, &cookie_file, &probe).unwrap();

        assert_eq!(session.cookies[0].value, "fresh");
        assert_eq!(store.load().unwrap(), session);
    }

    #[test]
    fn test_missing_session_skips_probe() {
        let tmp = tempfile::tempdir().unwrap();
        let store = SessionStore::new(tmp.path().join("session.json"));
        let cookie_file = tmp.path().join("cookies.json");
        fs::write(&cookie_file, RAW).unwrap();

        let probe = FixedProbe::new(Ok(true));
        ensure_session(&store, &cookie_file, &probe).unwrap();

        assert_eq!(probe.calls.get(), 0);
        assert!(store.exists());
    }

    #[test]
    fn test_probe_error_counts_as_stale() {
        let tmp = tempfile::tempdir().unwrap();
        let store = SessionStore::new(tmp.path().join("session.json"));
        store.save(&saved_session("old")).unwrap();
        let cookie_file = tmp.path().join("cookies.json");
        fs::write(&cookie_file, RAW).unwrap();

        let probe = FixedProbe::new(Err(Error::Browser("timeout".into())));
        let session = ensure_session(&store, &cookie_file, &probe).unwrap();
        assert_eq!(session.cookies[0].value, "fresh");
    }

    #[test]
    fn test_corrupt_session_is_regenerated() {
        let tmp = tempfile::tempdir().unwrap();
        let store = SessionStore::new(tmp.path().join("session.json"));
        fs::write(store.path(), "{not json").unwrap();
        let cookie_file = tmp.path().join("cookies.json");
        fs::write(&cookie_file, RAW).unwrap();

        let probe = FixedProbe::new(Ok(true));
        let session = ensure_session(&store, &cookie_file, &probe).unwrap();
        assert_eq!(session.cookies.len(), 1);
        assert_eq!(probe.calls.get(), 0);
    }

    #[test]
    fn test_regeneration_without_cookie_file_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let store = SessionStore::new(tmp.path().join("session.json"));

        let probe = FixedProbe::new(Ok(true));
        let err = ensure_session(&store, &tmp.path().join("cookies.json"), &probe).unwrap_err();
        assert!(matches!(err, Error::MissingCookieFile(_)));
        assert!(!store.exists());
    }

    #[test]
    fn test_loads_foreign_storage_state() {
        let tmp = tempfile::tempdir().unwrap();
        let store = SessionStore::new(tmp.path().join("session.json"));
        fs::write(
            store.path(),
            r#"{"cookies":[{"name":"a","value":"b","domain":".tiktok.com","path":"/",
                "expires":-1,"httpOnly":false,"secure":true,"sameSite":"None"}],
               "origins":[{"origin":"https://www.tiktok.com","localStorage":[]}]}"#,
        )
        .unwrap();

        let state = store.load().unwrap();
        assert_eq!(state.cookies[0].same_site, crate::session::SameSite::None);
        assert_eq!(state.origins.len(), 1);
    }

    #[test]
    fn test_stale_session_reason() {
        let tmp = tempfile::tempdir().unwrap();
        let store = SessionStore::new(tmp.path().join("session.json"));

        let err = load_live_session(&store, &FixedProbe::new(Ok(true))).unwrap_err();
        assert!(matches!(err, Error::SessionInvalid(ref m) if m.contains("no saved session")));

        store.save(&saved_session("old")).unwrap();
        let err = load_live_session(&store, &FixedProbe::new(Ok(false))).unwrap_err();
        assert!(matches!(err, Error::SessionInvalid(ref m) if m == "no longer logged in"));

        let session = load_live_session(&store, &FixedProbe::new(Ok(true))).unwrap();
        assert_eq!(session.cookies[0].value, "old");
    }
}
