//! Common frontend components and utilities for Doorway

pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod hooks;
pub mod services;
pub mod session;

pub use auth::context::AuthContext;
pub use client::{authenticated_client, public_client, set_auth_token};
pub use components::{Feedback, FeedbackKind, FieldKind, Form, FormField, Spinner};
pub use config::AuthConfig;
pub use session::{Session, SessionStore};
