use crate::routes::Route;
use doorway_frontend_common::{
    auth::{use_auth, AuthAction},
    components::{Feedback, FeedbackKind, Spinner},
    services::AuthApiService,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("HomePage rendered outside a router");
    let profile_error = use_state(String::new);

    // Anonymous visitors go back to login without rendering page content.
    // The loading flag keeps the guard from firing before hydration.
    {
        let navigator = navigator.clone();
        use_effect_with(
            (auth.user.clone(), auth.is_loading),
            move |(user, is_loading)| {
                if !is_loading && user.is_none() {
                    navigator.replace(&Route::Login);
                }
                || ()
            },
        );
    }

    // Fetch the profile once authenticated; this is the request that first
    // notices a stale token.
    {
        let profile_error = profile_error.clone();
        use_effect_with(auth.user.clone(), move |user| {
            if user.is_some() {
                spawn_local(async move {
                    if let Err(error) = AuthApiService::new().get_profile().await {
                        tracing::warn!(%error, "profile fetch failed");
                        profile_error.set(error);
                    }
                });
            }
            || ()
        });
    }

    if auth.is_loading {
        return html! { <Spinner text={Some("Loading...".to_string())} /> };
    }
    let Some(user) = auth.user.clone() else {
        return html! {};
    };

    let on_logout = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            auth.dispatch(AuthAction::Logout);
            navigator.push(&Route::Login);
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900">
            <div class="max-w-3xl mx-auto py-10 px-4 space-y-8">
                <h1 class="text-3xl font-bold text-gray-900 dark:text-white">
                    {format!("Welcome, {}!", user.email)}
                </h1>
                <Feedback message={(*profile_error).clone()} kind={FeedbackKind::Error} />
                <button
                    onclick={on_logout}
                    class="px-4 py-2 text-sm font-medium text-white bg-red-500 hover:bg-red-600 rounded-lg transition-colors"
                >
                    {"Logout"}
                </button>
            </div>
        </div>
    }
}
