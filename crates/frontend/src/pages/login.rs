use crate::routes::Route;
use doorway_client::types::LoginRequest;
use doorway_frontend_common::{
    auth::{use_auth, AuthAction},
    components::{Feedback, FeedbackKind, FieldKind, Form, FormField, Spinner},
    hooks::{use_login, LoginState},
};
use std::collections::HashMap;
use yew::prelude::*;
use yew_router::prelude::*;

fn login_fields() -> Vec<FormField> {
    vec![
        FormField {
            name: "email",
            kind: FieldKind::Email,
            label: "Email",
            required: true,
        },
        FormField {
            name: "password",
            kind: FieldKind::Password,
            label: "Password",
            required: true,
        },
    ]
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("LoginPage rendered outside a router");
    let form_error = use_state(String::new);
    let login = use_login();

    // Already signed in: go home without rendering the form
    {
        let navigator = navigator.clone();
        use_effect_with(auth.user.clone(), move |user| {
            if user.is_some() {
                navigator.replace(&Route::Home);
            }
            || ()
        });
    }

    // React to request completion
    {
        let auth = auth.clone();
        let navigator = navigator.clone();
        let form_error = form_error.clone();
        use_effect_with(login.state(), move |state| {
            match state {
                LoginState::Success(response) => {
                    auth.dispatch(AuthAction::Login(response.clone()));
                    navigator.push(&Route::Home);
                }
                LoginState::Error(message) => form_error.set(message.clone()),
                LoginState::Idle | LoginState::Loading => {}
            }
            || ()
        });
    }

    if auth.is_loading {
        return html! { <Spinner text={Some("Loading...".to_string())} /> };
    }
    if auth.user.is_some() {
        return html! {};
    }

    let on_submit = {
        let form_error = form_error.clone();
        let login = login.clone();
        Callback::from(move |values: HashMap<String, String>| {
            form_error.set(String::new());
            login.mutate(LoginRequest {
                email: values.get("email").cloned().unwrap_or_default(),
                password: values.get("password").cloned().unwrap_or_default(),
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white dark:bg-gray-800 rounded-2xl shadow-lg p-8">
                <h1 class="text-2xl font-bold text-center text-gray-900 dark:text-white mb-4">
                    {"Sign In"}
                </h1>
                <Feedback message={(*form_error).clone()} kind={FeedbackKind::Error} />
                <Form
                    fields={login_fields()}
                    submit_text="Sign In"
                    on_submit={on_submit}
                    busy={login.is_loading()}
                />
                <p class="text-center text-sm text-gray-500 dark:text-gray-400 mt-4">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::Signup} classes="text-blue-500 hover:text-blue-400">
                        {"Sign Up"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
