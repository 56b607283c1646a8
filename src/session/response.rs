use super::client::RemoteError;
use axum::{
    Json,
    response::{IntoResponse, Response},
};
use secrecy::SecretString;
use serde::Serialize;
use serde_json::{Value, json};

/// Result of a session action as handed back to the caller.
///
/// Either the remote API body, passed through unchanged, or the synthesized
/// failure envelope `{"success": false, "message": ...}` when no body could be
/// obtained. The envelope shape is assumed, not validated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ActionResponse(Value);

impl ActionResponse {
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self(json!({ "success": false, "message": message }))
    }

    /// `true` only when the body carries `"success": true`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.0.get("success").and_then(Value::as_bool) == Some(true)
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    /// Credential pair from `data.accessToken` / `data.refreshToken`.
    ///
    /// Returns `None` unless the body is success-flagged and both tokens are
    /// strings, so callers can never store one without the other.
    #[must_use]
    pub fn token_pair(&self) -> Option<TokenPair> {
        if !self.is_success() {
            return None;
        }
        let data = self.0.get("data")?;
        let access_token = data.get("accessToken")?.as_str()?;
        let refresh_token = data.get("refreshToken")?.as_str()?;

        Some(TokenPair {
            access_token: SecretString::from(access_token.to_string()),
            refresh_token: SecretString::from(refresh_token.to_string()),
        })
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for ActionResponse {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Result<Value, RemoteError>> for ActionResponse {
    fn from(result: Result<Value, RemoteError>) -> Self {
        match result {
            Ok(value) => Self(value),
            Err(err) => Self::failure(err.to_string()),
        }
    }
}

impl IntoResponse for ActionResponse {
    fn into_response(self) -> Response {
        Json(self.0).into_response()
    }
}

/// Access and refresh tokens issued together by register/login.
#[derive(Debug)]
pub struct TokenPair {
    pub access_token: SecretString,
    pub refresh_token: SecretString,
}
