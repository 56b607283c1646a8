//! Server-side authentication actions backed by the remote Rate My Byte API.
//!
//! Flow Overview:
//! 1) A handler extracts the request's [`CookieJar`] and, for write actions, the
//!    submitted [`FormPayload`].
//! 2) The action looks up its [`Endpoint`] descriptor and calls [`AuthApi::call`],
//!    attaching the access or refresh token from the jar when required.
//! 3) Register and login store the returned credential pair; logout clears it.
//! 4) The jar travels back with the response so `Set-Cookie` headers are emitted
//!    for exactly the request that produced them.
//!
//! Security boundary:
//! - Tokens are treated as opaque. The only local inspection is decoding the
//!   access token payload for display ([`identity`]); signatures are not checked.
//! - Payloads and tokens are never logged.

mod actions;
mod client;
pub mod cookies;
pub mod endpoint;
pub mod identity;
mod response;

pub use actions::SessionBoundary;
pub use axum_extra::extract::CookieJar;
pub use client::{AuthApi, RemoteError};
pub use cookies::{ACCESS_TOKEN_COOKIE, CookiePolicy, REFRESH_TOKEN_COOKIE};
pub use endpoint::{Credential, Endpoint};
pub use identity::Claims;
pub use response::{ActionResponse, TokenPair};

/// Caller-supplied form fields, forwarded verbatim as the JSON request body.
pub type FormPayload = serde_json::Map<String, serde_json::Value>;
