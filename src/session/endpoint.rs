//! Remote API endpoint descriptors.
//!
//! Every remote call has the same shape, so each action is just one row of this
//! table fed into [`super::AuthApi::call`].

use reqwest::Method;

/// Which cookie, if any, is sent as the raw `Authorization` header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    None,
    AccessToken,
    RefreshToken,
}

#[derive(Debug, Clone)]
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
    pub credential: Credential,
    pub sends_body: bool,
}

pub static REGISTER: Endpoint = Endpoint {
    method: Method::POST,
    path: "/auth/register",
    credential: Credential::None,
    sends_body: true,
};

pub static LOGIN: Endpoint = Endpoint {
    method: Method::POST,
    path: "/auth/login",
    credential: Credential::None,
    sends_body: true,
};

pub static GET_ME: Endpoint = Endpoint {
    method: Method::GET,
    path: "/auth/get-me",
    credential: Credential::AccessToken,
    sends_body: false,
};

pub static GENERATE_ACCESS_TOKEN: Endpoint = Endpoint {
    method: Method::POST,
    path: "/auth/generate-access-token",
    credential: Credential::RefreshToken,
    sends_body: false,
};

pub static CHANGE_PASSWORD: Endpoint = Endpoint {
    method: Method::POST,
    path: "/auth/change-password",
    credential: Credential::AccessToken,
    sends_body: true,
};

pub static FORGET_PASSWORD: Endpoint = Endpoint {
    method: Method::POST,
    path: "/auth/forget-password",
    credential: Credential::None,
    sends_body: true,
};

pub static RESET_PASSWORD: Endpoint = Endpoint {
    method: Method::POST,
    path: "/auth/reset-password",
    credential: Credential::None,
    sends_body: true,
};

/// All endpoints, in the order the actions are documented.
pub static ALL: [&Endpoint; 7] = [
    &REGISTER,
    &LOGIN,
    &GET_ME,
    &GENERATE_ACCESS_TOKEN,
    &CHANGE_PASSWORD,
    &FORGET_PASSWORD,
    &RESET_PASSWORD,
];
