use crate::routes::Route;
use doorway_client::types::SignupRequest;
use doorway_frontend_common::{
    auth::use_auth,
    components::{Feedback, FeedbackKind, FieldKind, Form, FormField, Spinner},
    hooks::{use_signup, SignupState},
    AuthConfig,
};
use gloo::timers::callback::Timeout;
use std::collections::HashMap;
use yew::prelude::*;
use yew_router::prelude::*;

const SUCCESS_MESSAGE: &str = "Profile created successfully! Redirecting to login...";

fn signup_fields() -> Vec<FormField> {
    vec![
        FormField {
            name: "firstName",
            kind: FieldKind::Text,
            label: "First Name",
            required: true,
        },
        FormField {
            name: "lastName",
            kind: FieldKind::Text,
            label: "Last Name",
            required: true,
        },
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

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("SignupPage rendered outside a router");
    let form_error = use_state(String::new);
    let success_message = use_state(String::new);
    let signup = use_signup();

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
        let form_error = form_error.clone();
        let success_message = success_message.clone();
        use_effect_with(signup.state(), move |state| {
            match state {
                SignupState::Success => success_message.set(SUCCESS_MESSAGE.to_string()),
                SignupState::Error(message) => form_error.set(message.clone()),
                SignupState::Idle | SignupState::Loading => {}
            }
            || ()
        });
    }

    // A successful signup redirects to the login page after a fixed delay;
    // leaving the page first cancels the pending redirect.
    {
        let navigator = navigator.clone();
        use_effect_with((*success_message).clone(), move |message: &String| {
            let timeout = (!message.is_empty()).then(|| {
                Timeout::new(AuthConfig::SIGNUP_REDIRECT_DELAY_MS, move || {
                    navigator.push(&Route::Login);
                })
            });
            move || drop(timeout)
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
        let success_message = success_message.clone();
        let signup = signup.clone();
        Callback::from(move |values: HashMap<String, String>| {
            form_error.set(String::new());
            success_message.set(String::new());
            signup.mutate(SignupRequest {
                first_name: values.get("firstName").cloned().unwrap_or_default(),
                last_name: values.get("lastName").cloned().unwrap_or_default(),
                email: values.get("email").cloned().unwrap_or_default(),
                password: values.get("password").cloned().unwrap_or_default(),
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white dark:bg-gray-800 rounded-2xl shadow-lg p-8">
                <h1 class="text-2xl font-bold text-center text-gray-900 dark:text-white mb-4">
                    {"Sign Up"}
                </h1>
                <Feedback message={(*form_error).clone()} kind={FeedbackKind::Error} />
                <Feedback message={(*success_message).clone()} kind={FeedbackKind::Success} />
                <Form
                    fields={signup_fields()}
                    submit_text="Sign Up"
                    on_submit={on_submit}
                    busy={signup.is_loading()}
                />
                <p class="text-center text-sm text-gray-500 dark:text-gray-400 mt-4">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login} classes="text-blue-500 hover:text-blue-400">
                        {"Sign In"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
