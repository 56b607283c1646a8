//! Credential cookies.
//!
//! The jar is the request-scoped cookie store: it is extracted from the incoming
//! request, threaded through the action and returned with the response.

use super::response::TokenPair;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use secrecy::ExposeSecret;

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// Attributes applied to every credential cookie.
#[derive(Debug, Clone, Copy, Default)]
pub struct CookiePolicy {
    /// Only mark cookies secure when the site is served over HTTPS.
    pub secure: bool,
}

impl CookiePolicy {
    #[must_use]
    pub const fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// Write both credential cookies.
    #[must_use]
    pub fn store_credentials(&self, jar: CookieJar, pair: &TokenPair) -> CookieJar {
        jar.add(self.cookie(
            ACCESS_TOKEN_COOKIE,
            pair.access_token.expose_secret().to_string(),
        ))
        .add(self.cookie(
            REFRESH_TOKEN_COOKIE,
            pair.refresh_token.expose_secret().to_string(),
        ))
    }

    /// Remove both credential cookies, whether or not they were present.
    #[must_use]
    pub fn clear_credentials(&self, jar: CookieJar) -> CookieJar {
        jar.remove(self.cookie(ACCESS_TOKEN_COOKIE, String::new()))
            .remove(self.cookie(REFRESH_TOKEN_COOKIE, String::new()))
    }

    /// Session-scoped, server-only cookie.
    #[must_use]
    pub fn cookie(&self, name: &'static str, value: String) -> Cookie<'static> {
        Cookie::build((name, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .build()
    }
}

#[must_use]
pub fn access_token(jar: &CookieJar) -> Option<&str> {
    jar.get(ACCESS_TOKEN_COOKIE).map(Cookie::value)
}

#[must_use]
pub fn refresh_token(jar: &CookieJar) -> Option<&str> {
    jar.get(REFRESH_TOKEN_COOKIE).map(Cookie::value)
}
