//! Login mutation hook

use crate::services::AuthApiService;
use doorway_client::types::{AuthResponse, LoginRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// State of an in-flight login request
#[derive(Clone, Debug, PartialEq, Default)]
pub enum LoginState {
    #[default]
    Idle,
    Loading,
    Success(AuthResponse),
    Error(String),
}

/// Handle returned by [`use_login`]
#[derive(Clone)]
pub struct UseLoginHandle {
    state: UseStateHandle<LoginState>,
}

impl UseLoginHandle {
    /// Current request state
    pub fn state(&self) -> LoginState {
        (*self.state).clone()
    }

    pub fn is_loading(&self) -> bool {
        matches!(*self.state, LoginState::Loading)
    }

    /// Fire the login request
    pub fn mutate(&self, request: LoginRequest) {
        let state = self.state.clone();
        state.set(LoginState::Loading);
        spawn_local(async move {
            match AuthApiService::new().login(request).await {
                Ok(response) => state.set(LoginState::Success(response)),
                Err(error) => state.set(LoginState::Error(error)),
            }
        });
    }

    /// Return to the idle state
    pub fn reset(&self) {
        self.state.set(LoginState::Idle);
    }
}

/// Hook wrapping the login API call in mutation-style state
#[hook]
pub fn use_login() -> UseLoginHandle {
    let state = use_state(LoginState::default);
    UseLoginHandle { state }
}
