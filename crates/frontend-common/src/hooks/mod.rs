//! Custom hooks for the application

pub mod use_login;
pub mod use_signup;

pub use use_login::{use_login, LoginState, UseLoginHandle};
pub use use_signup::{use_signup, SignupState, UseSignupHandle};
