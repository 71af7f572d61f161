//! Inline feedback banner

use yew::prelude::*;

/// Visual tone of a feedback message
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FeedbackKind {
    Error,
    Success,
}

#[derive(Properties, Clone, PartialEq)]
pub struct FeedbackProps {
    pub message: String,
    pub kind: FeedbackKind,
}

/// Inline feedback text shown above a form. Renders nothing for an empty
/// message; multi-line messages (bulleted validation lists) render one line
/// per paragraph.
#[function_component(Feedback)]
pub fn feedback(props: &FeedbackProps) -> Html {
    if props.message.is_empty() {
        return html! {};
    }

    let (banner_class, text_class) = match props.kind {
        FeedbackKind::Error => (
            "bg-red-500/20 border border-red-500/30 rounded-lg p-4 mb-4",
            "text-red-700 dark:text-red-200 text-sm",
        ),
        FeedbackKind::Success => (
            "bg-green-500/20 border border-green-500/30 rounded-lg p-4 mb-4",
            "text-green-700 dark:text-green-200 text-sm",
        ),
    };

    html! {
        <div class={banner_class} role="alert">
            { for props.message.lines().map(|line| html! {
                <p class={text_class}>{line}</p>
            })}
        </div>
    }
}
