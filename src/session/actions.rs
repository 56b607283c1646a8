use super::{
    ActionResponse, FormPayload,
    client::AuthApi,
    cookies::{self, CookiePolicy},
    endpoint::{self, Credential, Endpoint},
    identity::{self, Claims},
};
use axum_extra::extract::CookieJar;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

/// The session actions, sharing one API client and cookie policy.
///
/// Actions take the request's cookie jar by value and return it, possibly
/// updated, alongside their result.
#[derive(Debug, Clone)]
pub struct SessionBoundary {
    api: AuthApi,
    cookies: CookiePolicy,
}

impl SessionBoundary {
    #[must_use]
    pub fn new(api: AuthApi, cookies: CookiePolicy) -> Self {
        Self { api, cookies }
    }

    #[must_use]
    pub fn api(&self) -> &AuthApi {
        &self.api
    }

    #[must_use]
    pub fn cookie_policy(&self) -> CookiePolicy {
        self.cookies
    }

    /// Create an account; stores the issued credential pair on success.
    #[instrument(skip_all)]
    pub async fn register(
        &self,
        jar: CookieJar,
        payload: FormPayload,
    ) -> (CookieJar, ActionResponse) {
        self.authenticate(&endpoint::REGISTER, jar, payload).await
    }

    /// Sign in; stores the issued credential pair on success.
    #[instrument(skip_all)]
    pub async fn login(&self, jar: CookieJar, payload: FormPayload) -> (CookieJar, ActionResponse) {
        self.authenticate(&endpoint::LOGIN, jar, payload).await
    }

    /// Fetch the signed-in user's profile from the API.
    #[instrument(skip_all)]
    pub async fn get_me(&self, jar: &CookieJar) -> ActionResponse {
        self.forward(&endpoint::GET_ME, jar, None).await
    }

    /// Drop both credential cookies. Nothing is sent to the API.
    #[instrument(skip_all)]
    pub fn logout(&self, jar: CookieJar) -> CookieJar {
        info!("Clearing session cookies");
        self.cookies.clear_credentials(jar)
    }

    /// Claims of the current access token, decoded without verification.
    #[must_use]
    pub fn current_user(&self, jar: &CookieJar) -> Option<Claims> {
        identity::current_claims(jar)
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// The returned token is not written back into the jar; the caller decides
    /// whether to persist it.
    #[instrument(skip_all)]
    pub async fn refresh_access_token(&self, jar: &CookieJar) -> ActionResponse {
        self.forward(&endpoint::GENERATE_ACCESS_TOKEN, jar, None)
            .await
    }

    #[instrument(skip_all)]
    pub async fn change_password(&self, jar: &CookieJar, payload: FormPayload) -> ActionResponse {
        self.forward(&endpoint::CHANGE_PASSWORD, jar, Some(payload))
            .await
    }

    /// Request a password-reset message. Unauthenticated.
    #[instrument(skip_all)]
    pub async fn forget_password(&self, payload: FormPayload) -> ActionResponse {
        self.forward(&endpoint::FORGET_PASSWORD, &CookieJar::new(), Some(payload))
            .await
    }

    /// Complete a password reset. Unauthenticated.
    #[instrument(skip_all)]
    pub async fn reset_password(&self, payload: FormPayload) -> ActionResponse {
        self.forward(&endpoint::RESET_PASSWORD, &CookieJar::new(), Some(payload))
            .await
    }

    async fn authenticate(
        &self,
        endpoint: &Endpoint,
        jar: CookieJar,
        payload: FormPayload,
    ) -> (CookieJar, ActionResponse) {
        let response = self.forward(endpoint, &jar, Some(payload)).await;

        if !response.is_success() {
            return (jar, response);
        }

        match response.token_pair() {
            Some(pair) => {
                info!(path = endpoint.path, "Storing session cookies");
                (self.cookies.store_credentials(jar, &pair), response)
            }
            None => {
                warn!(
                    path = endpoint.path,
                    "Successful response without a credential pair; cookies left unchanged"
                );
                (jar, response)
            }
        }
    }

    async fn forward(
        &self,
        endpoint: &Endpoint,
        jar: &CookieJar,
        payload: Option<FormPayload>,
    ) -> ActionResponse {
        // A missing cookie is still sent, as an empty Authorization value.
        let token = match endpoint.credential {
            Credential::None => None,
            Credential::AccessToken => Some(cookies::access_token(jar).unwrap_or_default()),
            Credential::RefreshToken => Some(cookies::refresh_token(jar).unwrap_or_default()),
        };
        let body = payload.map(Value::Object);

        let response = ActionResponse::from(self.api.call(endpoint, token, body.as_ref()).await);

        if let Some(message) = response.message().filter(|_| !response.is_success()) {
            debug!(path = endpoint.path, "Action failed: {message}");
        }

        response
    }
}
