//! Authentication module

pub mod context;

pub use context::{use_auth, use_is_authenticated, AuthAction, AuthContext, AuthProvider};
