use crate::session::{CookieJar, SessionBoundary};
use crate::shell::{SITE_THEME, ThemeMode};
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ThemeChoice {
    pub theme: ThemeMode,
}

#[utoipa::path(
    post,
    path = "/theme",
    request_body = ThemeChoice,
    responses(
        (status = 204, description = "Theme preference stored in the `theme` cookie"),
        (status = 422, description = "Unknown theme"),
    ),
    tag = "shell"
)]
pub async fn set_theme(
    Extension(session): Extension<Arc<SessionBoundary>>,
    jar: CookieJar,
    Json(choice): Json<ThemeChoice>,
) -> impl IntoResponse {
    debug!(theme = %choice.theme, "Storing theme preference");
    let secure = session.cookie_policy().secure;
    (
        jar.add(SITE_THEME.cookie(choice.theme, secure)),
        StatusCode::NO_CONTENT,
    )
}
