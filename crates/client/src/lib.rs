//! Typed HTTP clients for the Doorway authentication API.
//!
//! [`PublicClient`] serves the unauthenticated endpoints (login, signup);
//! exchanging it for an [`AuthenticatedClient`] attaches a bearer token for
//! the protected ones. The split keeps token handling a compile-time concern
//! rather than a per-request option.

pub mod error;
pub mod types;

pub use error::ClientError;

use reqwest::{Client, ClientBuilder, Method};
use serde::de::DeserializeOwned;
use types::{AuthResponse, LoginRequest, SignupRequest};

const USER_AGENT: &str = "doorway-client/0.1.0";

/// Client for endpoints that do not require authentication
#[derive(Clone)]
pub struct PublicClient {
    client: Client,
    base_url: String,
}

/// Client for endpoints that require a bearer token
#[derive(Clone)]
pub struct AuthenticatedClient {
    client: Client,
    base_url: String,
    token: String,
}

fn build_inner_client() -> Result<Client, ClientError> {
    Ok(ClientBuilder::new().user_agent(USER_AGENT).build()?)
}

impl PublicClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: build_inner_client()?,
            base_url,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request; a non-success status is normalized into a
    /// display-ready [`ClientError::Api`] with the given fallback message.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        fallback: &str,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "auth request rejected");
            Err(ClientError::from_error_body(status.as_u16(), &body, fallback))
        }
    }

    /// Log in with email and password
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ClientError> {
        let req = self.request(Method::POST, "/auth/login").json(&request);
        self.execute(req, "Invalid credentials").await
    }

    /// Create a new account; the success payload is opaque to the client
    pub async fn signup(&self, request: SignupRequest) -> Result<serde_json::Value, ClientError> {
        let req = self.request(Method::POST, "/auth/signup").json(&request);
        self.execute(req, "Signup failed").await
    }

    /// Attach a bearer token, producing an authenticated client
    pub fn authenticate(self, token: impl Into<String>) -> AuthenticatedClient {
        AuthenticatedClient {
            client: self.client,
            base_url: self.base_url,
            token: token.into(),
        }
    }
}

impl AuthenticatedClient {
    /// Create a new authenticated client
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Ok(PublicClient::new(base_url)?.authenticate(token))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url).bearer_auth(&self.token)
    }

    /// Fetch the authenticated user's profile.
    ///
    /// The profile error body is not parsed; any non-success status maps to
    /// a fixed message.
    pub async fn get_profile(&self) -> Result<serde_json::Value, ClientError> {
        let response = self.request(Method::GET, "/auth/profile").send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            tracing::warn!(status = status.as_u16(), "profile request rejected");
            Err(ClientError::Api {
                status: status.as_u16(),
                message: "Failed to fetch profile".to_string(),
            })
        }
    }
}
