//! Client configuration and initialization

use crate::config;
use doorway_client::{AuthenticatedClient, ClientError, PublicClient};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Global client instances
static PUBLIC_CLIENT: Lazy<Mutex<Option<PublicClient>>> = Lazy::new(|| Mutex::new(None));
static AUTH_CLIENT: Lazy<Mutex<Option<AuthenticatedClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the public client instance (for unauthenticated endpoints)
pub fn public_client() -> Result<PublicClient, ClientError> {
    let mut client_lock = PUBLIC_CLIENT
        .lock()
        .expect("Failed to acquire public client lock");

    if let Some(client) = client_lock.as_ref() {
        Ok(client.clone())
    } else {
        let client = PublicClient::new(config::api_base_url())?;
        *client_lock = Some(client.clone());
        Ok(client)
    }
}

/// Get the authenticated client instance (`None` when not logged in)
pub fn authenticated_client() -> Option<AuthenticatedClient> {
    AUTH_CLIENT
        .lock()
        .expect("Failed to acquire auth client lock")
        .clone()
}

/// Install or clear the bearer token on the authenticated client
pub fn set_auth_token(token: Option<&str>) -> Result<(), ClientError> {
    let mut auth_lock = AUTH_CLIENT
        .lock()
        .expect("Failed to acquire auth client lock");

    if let Some(token) = token {
        *auth_lock = Some(AuthenticatedClient::new(config::api_base_url(), token)?);
    } else {
        *auth_lock = None;
    }

    Ok(())
}
