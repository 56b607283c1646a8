use crate::{
    api,
    cli::telemetry,
    session::{AuthApi, CookiePolicy, SessionBoundary},
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub api_url: String,
    pub cookie_secure: bool,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the API URL is invalid or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let api = AuthApi::new(&args.api_url)
        .with_context(|| format!("Invalid API URL: {}", args.api_url))?;

    debug!(
        port = args.port,
        cookie_secure = args.cookie_secure,
        "Starting session gateway"
    );

    let session = Arc::new(SessionBoundary::new(
        api,
        CookiePolicy::new(args.cookie_secure),
    ));

    let result = api::new(args.port, session).await;

    telemetry::shutdown_tracer();

    result
}
