use crate::pages::{HomePage, LoginPage, SignupPage};
use yew::prelude::*;
use yew_router::prelude::*;

/// Application routes. Login sits at the root; logout and a finished signup
/// both navigate back to `/`.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/home")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::Home => html! { <HomePage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Login} /> },
    }
}
