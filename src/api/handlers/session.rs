//! Session action endpoints.
//!
//! Each handler extracts the request cookie jar, runs one action and returns the
//! jar with the response, so cookie changes become `Set-Cookie` headers. Action
//! failures are data (`success: false`) and always answer 200.

use crate::session::{ActionResponse, Claims, CookieJar, FormPayload, SessionBoundary};
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use utoipa::ToSchema;

/// Form fields forwarded verbatim to the remote API.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object, example = json!({"email": "a@b.com", "password": "secret"}))]
pub struct FormFields(pub FormPayload);

/// Shape the remote API is expected to answer with. Bodies are passed through
/// as-is, so extra fields survive.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ActionEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub data: Option<Value>,
}

/// Unverified access token claims.
#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object, example = json!({"email": "a@b.com", "role": "USER", "exp": 1_700_086_400}))]
pub struct CurrentUserClaims(pub Claims);

#[utoipa::path(
    post,
    path = "/session/register",
    request_body = FormFields,
    responses(
        (status = 200, description = "API response; session cookies set when `success` is true", body = ActionEnvelope),
    ),
    tag = "session"
)]
pub async fn register(
    Extension(session): Extension<Arc<SessionBoundary>>,
    jar: CookieJar,
    Json(FormFields(payload)): Json<FormFields>,
) -> impl IntoResponse {
    session.register(jar, payload).await
}

#[utoipa::path(
    post,
    path = "/session/login",
    request_body = FormFields,
    responses(
        (status = 200, description = "API response; session cookies set when `success` is true", body = ActionEnvelope),
    ),
    tag = "session"
)]
pub async fn login(
    Extension(session): Extension<Arc<SessionBoundary>>,
    jar: CookieJar,
    Json(FormFields(payload)): Json<FormFields>,
) -> impl IntoResponse {
    session.login(jar, payload).await
}

#[utoipa::path(
    get,
    path = "/session/me",
    responses(
        (status = 200, description = "Profile from the API, authenticated with the access token cookie", body = ActionEnvelope),
    ),
    tag = "session"
)]
pub async fn get_me(
    Extension(session): Extension<Arc<SessionBoundary>>,
    jar: CookieJar,
) -> ActionResponse {
    session.get_me(&jar).await
}

#[utoipa::path(
    post,
    path = "/session/logout",
    responses(
        (status = 204, description = "Session cookies cleared")
    ),
    tag = "session"
)]
pub async fn logout(
    Extension(session): Extension<Arc<SessionBoundary>>,
    jar: CookieJar,
) -> impl IntoResponse {
    (session.logout(jar), StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/session/current-user",
    responses(
        (status = 200, description = "Decoded access token claims, or null when signed out", body = CurrentUserClaims),
    ),
    tag = "session"
)]
pub async fn current_user(
    Extension(session): Extension<Arc<SessionBoundary>>,
    jar: CookieJar,
) -> Json<Option<CurrentUserClaims>> {
    Json(session.current_user(&jar).map(CurrentUserClaims))
}

#[utoipa::path(
    post,
    path = "/session/access-token",
    responses(
        (status = 200, description = "New access token from the API; cookies are not updated", body = ActionEnvelope),
    ),
    tag = "session"
)]
pub async fn refresh_access_token(
    Extension(session): Extension<Arc<SessionBoundary>>,
    jar: CookieJar,
) -> ActionResponse {
    session.refresh_access_token(&jar).await
}

#[utoipa::path(
    post,
    path = "/session/change-password",
    request_body = FormFields,
    responses(
        (status = 200, description = "API response", body = ActionEnvelope),
    ),
    tag = "session"
)]
pub async fn change_password(
    Extension(session): Extension<Arc<SessionBoundary>>,
    jar: CookieJar,
    Json(FormFields(payload)): Json<FormFields>,
) -> ActionResponse {
    session.change_password(&jar, payload).await
}

#[utoipa::path(
    post,
    path = "/session/forget-password",
    request_body = FormFields,
    responses(
        (status = 200, description = "API response", body = ActionEnvelope),
    ),
    tag = "session"
)]
pub async fn forget_password(
    Extension(session): Extension<Arc<SessionBoundary>>,
    Json(FormFields(payload)): Json<FormFields>,
) -> ActionResponse {
    session.forget_password(payload).await
}

#[utoipa::path(
    post,
    path = "/session/reset-password",
    request_body = FormFields,
    responses(
        (status = 200, description = "API response", body = ActionEnvelope),
    ),
    tag = "session"
)]
pub async fn reset_password(
    Extension(session): Extension<Arc<SessionBoundary>>,
    Json(FormFields(payload)): Json<FormFields>,
) -> ActionResponse {
    session.reset_password(payload).await
}
