//! Frontend configuration

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Local storage key for the persisted user record
    pub const USER_KEY: &'static str = "auth_user";

    /// Local storage key for the bearer token
    pub const TOKEN_KEY: &'static str = "auth_token";

    /// Delay before the signup page redirects to login, in milliseconds
    pub const SIGNUP_REDIRECT_DELAY_MS: u32 = 3_000;
}

/// Base URL of the authentication API.
///
/// Set `DOORWAY_API_URL` at build time to point at a remote backend.
pub fn api_base_url() -> String {
    option_env!("DOORWAY_API_URL")
        .unwrap_or("http://localhost:8080")
        .to_string()
}
