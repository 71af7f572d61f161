//! Global authentication context and provider

use crate::client::set_auth_token;
use crate::session::SessionStore;
use doorway_client::types::{AuthResponse, User};
use std::rc::Rc;
use yew::prelude::*;

/// Authentication context data.
///
/// Two logical states: Anonymous (`user == None`) and Authenticated.
/// `is_loading` stays true until the one-time local storage hydration has
/// run, so route guards do not redirect before the session is restored.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContextData {
    pub user: Option<User>,
    pub is_loading: bool,
}

/// Authentication context actions
pub enum AuthAction {
    /// Successful login; persists the session and installs the token
    Login(AuthResponse),
    /// Session restored from local storage on mount
    Hydrate(User, String),
    /// Hydration finished with no stored session
    HydrationFinished,
    /// Clears the session and returns to Anonymous
    Logout,
}

/// Authentication context
pub type AuthContext = UseReducerHandle<AuthContextData>;

impl Default for AuthContextData {
    fn default() -> Self {
        Self {
            user: None,
            is_loading: true, // Start with loading to check local storage
        }
    }
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::Login(response) => {
                // Update the client with the auth token
                let _ = set_auth_token(Some(&response.access_token));

                // Save to local storage
                SessionStore::browser().save(&response.user, &response.access_token);

                tracing::debug!(user_id = response.user.id, "authenticated");
                Rc::new(Self {
                    user: Some(response.user),
                    is_loading: false,
                })
            }
            AuthAction::Hydrate(user, token) => {
                // The stored session is trusted without a validation call,
                // until a protected request fails
                let _ = set_auth_token(Some(&token));

                tracing::debug!(user_id = user.id, "session restored");
                Rc::new(Self {
                    user: Some(user),
                    is_loading: false,
                })
            }
            AuthAction::HydrationFinished => Rc::new(Self {
                user: self.user.clone(),
                is_loading: false,
            }),
            AuthAction::Logout => {
                // Clear the auth token from the client
                let _ = set_auth_token(None);

                // Clear from local storage
                SessionStore::browser().clear();

                tracing::debug!("logged out");
                Rc::new(Self {
                    user: None,
                    is_loading: false,
                })
            }
        }
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth_state = use_reducer(AuthContextData::default);

    // Load the session from local storage on mount
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            match SessionStore::browser().load() {
                Some(session) => {
                    auth_state.dispatch(AuthAction::Hydrate(session.user, session.token));
                }
                None => auth_state.dispatch(AuthAction::HydrationFinished),
            }
            || ()
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth_state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    let auth = use_auth();
    auth.user.is_some()
}
