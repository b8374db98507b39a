/**
 * Session Cookie Options
 *
 * This module defines the cookie attribute record used when issuing and
 * clearing the session cookie, and the constructor that produces the
 * default attributes for a given environment mode.
 *
 * # Attributes
 *
 * The session cookie is always `HttpOnly` with `SameSite=Strict`, a
 * fifteen-minute max age, and `Path=/`. The `Secure` attribute is set
 * only when running in production mode, so local development over plain
 * HTTP keeps working.
 *
 * The production flag is passed explicitly by the caller rather than
 * read from process state, so options can be constructed in tests
 * without touching the environment.
 */

use std::time::Duration;

/// Name of the session cookie carrying the JWT
pub const SESSION_COOKIE: &str = "session";

/// Default session cookie lifetime
pub const SESSION_MAX_AGE: Duration = Duration::from_secs(15 * 60);

/// `SameSite` cookie attribute values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    /// Cookie is only sent on same-site requests
    Strict,
    /// Cookie is sent on top-level cross-site navigation
    Lax,
    /// Cookie is sent on all requests (requires `Secure`)
    None,
}

impl SameSite {
    /// Attribute value as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
            Self::None => "None",
        }
    }
}

/// Cookie attribute record
///
/// Produced by [`session_cookie_options`] and adjusted per call with the
/// `with_*` methods. An adjusted field wins; every other field keeps its
/// default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    /// Cookie is inaccessible to client-side script
    pub http_only: bool,
    /// Cookie is only sent over HTTPS
    pub secure: bool,
    /// Cross-site sending behavior
    pub same_site: SameSite,
    /// Lifetime of the cookie
    pub max_age: Duration,
    /// Path scope of the cookie
    pub path: String,
}

impl CookieOptions {
    /// Override the max age
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    /// Override the `Secure` attribute
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Override the `HttpOnly` attribute
    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    /// Override the `SameSite` attribute
    pub fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }

    /// Override the path scope
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}

/// Build the default session cookie options
///
/// Pure function of the environment mode: `HttpOnly`, `SameSite=Strict`,
/// fifteen-minute max age, `Path=/`, and `Secure` iff `is_production`.
pub fn session_cookie_options(is_production: bool) -> CookieOptions {
    CookieOptions {
        http_only: true,
        secure: is_production,
        same_site: SameSite::Strict,
        max_age: SESSION_MAX_AGE,
        path: "/".to_string(),
    }
}
