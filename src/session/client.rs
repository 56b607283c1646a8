use super::endpoint::Endpoint;
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

/// Failures that stop a remote call before a JSON body is available.
///
/// API-reported failures (`success: false`) are not errors here; they arrive as
/// a regular body and are handed back to the caller untouched.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client for the remote Rate My Byte API.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: Client,
    base_url: Url,
}

impl AuthApi {
    /// Build a client rooted at `base_url`.
    ///
    /// # Errors
    /// Returns an error if the URL is not an absolute http(s) URL or the HTTP
    /// client cannot be created.
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = parse_base_url(base_url)?;
        let client = Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .build()?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Call `endpoint` once and parse the response body as JSON.
    ///
    /// `token` becomes the raw `Authorization` header value (no scheme prefix).
    /// The HTTP status is not inspected: whatever JSON the API returns is the
    /// result. No retries and no local timeout.
    ///
    /// # Errors
    /// Returns [`RemoteError::Transport`] if the request or body read fails and
    /// [`RemoteError::Decode`] if the body is not JSON.
    #[instrument(skip(self, token, body), fields(path = endpoint.path))]
    pub async fn call(
        &self,
        endpoint: &Endpoint,
        token: Option<&str>,
        body: Option<&Value>,
    ) -> Result<Value, RemoteError> {
        let url = endpoint_url(&self.base_url, endpoint.path);

        let mut request = self.client.request(endpoint.method.clone(), url);

        if let Some(token) = token {
            request = request.header(AUTHORIZATION, token);
        }

        if endpoint.sends_body {
            let payload = match body {
                Some(value) => serde_json::to_vec(value)?,
                None => b"{}".to_vec(),
            };
            request = request.header(CONTENT_TYPE, "application/json").body(payload);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!(%status, bytes = bytes.len(), "remote api responded");

        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn parse_base_url(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|err| anyhow::anyhow!("invalid API base URL {raw}: {err}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(anyhow::anyhow!(
            "unsupported API base URL scheme {scheme}, expected http or https"
        )),
    }
}

/// Join an endpoint path onto the base URL, keeping any base path prefix.
fn endpoint_url(base: &Url, path: &str) -> String {
    let base = base.as_str().trim_end_matches('/');
    format!("{}/{}", base, path.trim_start_matches('/'))
}
