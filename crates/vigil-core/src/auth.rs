//! Authentication API client.
//!
//! Two request kinds (login, register) against `{base_url}/api/users/*`.
//! Credentials are validated before any request is built; a validation
//! failure never reaches the network.

use std::fmt;
use std::time::Instant;

use anyhow::Context;
use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::config::ApiConfig;
use crate::session::{Route, Session};
use crate::validate::{Credentials, ValidationError};

pub const LOGIN_PATH: &str = "/api/users/login";
pub const REGISTER_PATH: &str = "/api/users/register";

/// Which auth endpoint a submission targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthAction {
    Login,
    Register,
}

impl AuthAction {
    pub fn path(self) -> &'static str {
        match self {
            AuthAction::Login => LOGIN_PATH,
            AuthAction::Register => REGISTER_PATH,
        }
    }

    /// Where the user lands after success.
    pub fn landing_route(self) -> Route {
        match self {
            AuthAction::Login => Route::Dashboard,
            AuthAction::Register => Route::UserDashboard,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            AuthAction::Login => "Login successful",
            AuthAction::Register => "Registration successful",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            AuthAction::Login => "Login failed. Please try again.",
            AuthAction::Register => "Registration failed. Please try again.",
        }
    }
}

impl fmt::Display for AuthAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AuthAction::Login => "login",
            AuthAction::Register => "register",
        })
    }
}

/// Coarse classification used to pick how a failure is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Shown inline under the form.
    Validation,
    /// Non-200 status or transport failure; generic toast.
    Request,
    /// Anything else; logged, generic toast.
    Unhandled,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("server responded with status {status}")]
    Rejected { status: u16 },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid API base URL {url:?}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::Validation,
            AuthError::Rejected { .. } | AuthError::Transport(_) => ErrorKind::Request,
            AuthError::InvalidBaseUrl { .. } => ErrorKind::Unhandled,
        }
    }
}

/// Request body shared by both endpoints.
#[derive(Serialize)]
struct CredentialsPayload<'a> {
    user_mail: &'a str,
    password: &'a str,
}

/// HTTP client for the auth endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    base_url: String,
    http: reqwest::Client,
}

impl AuthClient {
    /// Creates a client for the configured base URL and timeout.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// # Errors
    /// See [`AuthClient::submit`].
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        self.submit(AuthAction::Login, credentials).await
    }

    /// # Errors
    /// See [`AuthClient::submit`].
    pub async fn register(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        self.submit(AuthAction::Register, credentials).await
    }

    /// Validates, then POSTs the credentials to the action's endpoint.
    ///
    /// # Errors
    /// - [`AuthError::Validation`] without any network traffic
    /// - [`AuthError::Rejected`] for any status other than 200
    /// - [`AuthError::Transport`] for connection, DNS or timeout failures
    /// - [`AuthError::InvalidBaseUrl`] when the endpoint URL cannot be built
    #[tracing::instrument(skip(self, credentials), fields(base_url = %self.base_url))]
    pub async fn submit(
        &self,
        action: AuthAction,
        credentials: &Credentials,
    ) -> Result<Session, AuthError> {
        credentials.validate()?;

        let url = self.endpoint(action)?;
        let payload = CredentialsPayload {
            user_mail: &credentials.email,
            password: &credentials.password,
        };

        tracing::info!("Sending auth request");
        let start = Instant::now();

        let response = self
            .http
            .post(url)
            .json(&payload)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Auth request transport error"))?;

        let status = response.status();
        let duration_ms = start.elapsed().as_millis() as u64;

        if status == StatusCode::OK {
            tracing::info!(duration_ms, "Auth request succeeded");
            Ok(Session::authenticated())
        } else {
            tracing::warn!(status = status.as_u16(), duration_ms, "Auth request rejected");
            Err(AuthError::Rejected {
                status: status.as_u16(),
            })
        }
    }

    fn endpoint(&self, action: AuthAction) -> Result<Url, AuthError> {
        let raw = format!("{}{}", self.base_url, action.path());
        Url::parse(&raw).map_err(|source| AuthError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })
    }
}
