//! Reusable UI components

pub mod feedback;
pub mod form;
pub mod spinner;

pub use feedback::{Feedback, FeedbackKind};
pub use form::{FieldKind, Form, FormField};
pub use spinner::Spinner;
