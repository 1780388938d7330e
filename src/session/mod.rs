//! Browser session module.
//!
//! Provides:
//! - Raw cookie import with `SameSite` normalisation
//! - The saved session store
//! - Liveness checking and regeneration

pub mod cookies;
pub mod store;

pub use cookies::{import_cookies, parse_raw_cookies, SameSite, SessionCookie};
pub use store::{ensure_session, SessionProbe, SessionState, SessionStore};
