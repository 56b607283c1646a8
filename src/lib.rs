//! # Rate My Byte (web session gateway)
//!
//! `ratemybyte` is the server side of the Rate My Byte web front-end. It renders
//! the root page layout and exposes the authentication actions that browser forms
//! call. Every action forwards to the remote Rate My Byte API and keeps the two
//! bearer credentials in cookies.
//!
//! ## Session Boundary
//!
//! Actions live in [`session`]. Each one is stateless: it receives the request's
//! cookie jar, performs at most one remote call and hands back the updated jar
//! together with the parsed API body. Transport and parse failures never escape
//! an action; they become `{"success": false, "message": ...}`.
//!
//! - **Cookies:** `accessToken` and `refreshToken` are written together on a
//!   successful register/login and removed together on logout.
//! - **Identity:** the current user is decoded from the access token payload
//!   without verifying its signature. It is only used for display.
//!
//! ## Presentation Shell
//!
//! [`shell`] composes document metadata, the theme context and the current-user
//! context around page content.

pub mod api;
pub mod cli;
pub mod session;
pub mod shell;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
