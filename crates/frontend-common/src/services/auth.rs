//! Authentication API service

use crate::client::{authenticated_client, public_client};
use doorway_client::types::{AuthResponse, LoginRequest, SignupRequest};

/// Authentication API service
#[derive(Clone)]
pub struct AuthApiService;

impl AuthApiService {
    /// Create a new auth API service
    pub fn new() -> Self {
        Self
    }
}

impl Default for AuthApiService {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthApiService {
    /// Log in with email and password
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, String> {
        let client = public_client().map_err(|e| format!("Failed to get client: {e}"))?;

        client.login(request).await.map_err(|e| e.to_string())
    }

    /// Create a new account
    pub async fn signup(&self, request: SignupRequest) -> Result<serde_json::Value, String> {
        let client = public_client().map_err(|e| format!("Failed to get client: {e}"))?;

        client.signup(request).await.map_err(|e| e.to_string())
    }

    /// Fetch the authenticated user's profile
    pub async fn get_profile(&self) -> Result<serde_json::Value, String> {
        let client = authenticated_client().ok_or_else(|| "Not authenticated".to_string())?;

        client.get_profile().await.map_err(|e| e.to_string())
    }
}
