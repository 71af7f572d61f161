//! Signup mutation hook

use crate::services::AuthApiService;
use doorway_client::types::SignupRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// State of an in-flight signup request.
///
/// The success payload is discarded; the signup page only needs to know the
/// account was created.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SignupState {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

/// Handle returned by [`use_signup`]
#[derive(Clone)]
pub struct UseSignupHandle {
    state: UseStateHandle<SignupState>,
}

impl UseSignupHandle {
    /// Current request state
    pub fn state(&self) -> SignupState {
        (*self.state).clone()
    }

    pub fn is_loading(&self) -> bool {
        matches!(*self.state, SignupState::Loading)
    }

    /// Fire the signup request
    pub fn mutate(&self, request: SignupRequest) {
        let state = self.state.clone();
        state.set(SignupState::Loading);
        spawn_local(async move {
            match AuthApiService::new().signup(request).await {
                Ok(_) => state.set(SignupState::Success),
                Err(error) => state.set(SignupState::Error(error)),
            }
        });
    }

    /// Return to the idle state
    pub fn reset(&self) {
        self.state.set(SignupState::Idle);
    }
}

/// Hook wrapping the signup API call in mutation-style state
#[hook]
pub fn use_signup() -> UseSignupHandle {
    let state = use_state(SignupState::default);
    UseSignupHandle { state }
}
