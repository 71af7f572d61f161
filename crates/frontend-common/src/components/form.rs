//! Declarative field-driven form.
//!
//! Pages describe their fields as data; the form renders the inputs, keeps a
//! name-to-value map in state, and hands the map to the caller on submit.
//! Beyond the `required` attribute there is no client-side validation.

use std::collections::HashMap;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Kind of input a form field renders
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
}

impl FieldKind {
    fn as_input_type(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
        }
    }
}

/// Static description of a single form field
#[derive(Clone, Debug, PartialEq)]
pub struct FormField {
    pub name: &'static str,
    pub kind: FieldKind,
    pub label: &'static str,
    pub required: bool,
}

#[derive(Properties, PartialEq)]
pub struct FormProps {
    pub fields: Vec<FormField>,
    pub submit_text: AttrValue,
    /// Called with the field-name to entered-value map on submit
    pub on_submit: Callback<HashMap<String, String>>,
    /// Disables the submit button while a request is in flight
    #[prop_or_default]
    pub busy: bool,
}

#[function_component(Form)]
pub fn form(props: &FormProps) -> Html {
    let values = use_state(HashMap::<String, String>::new);

    let onsubmit = {
        let values = values.clone();
        let callback = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            callback.emit((*values).clone());
        })
    };

    html! {
        <form {onsubmit} class="space-y-4">
            { for props.fields.iter().map(|field| {
                let oninput = {
                    let values = values.clone();
                    let name = field.name;
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        let mut next = (*values).clone();
                        next.insert(name.to_string(), input.value());
                        values.set(next);
                    })
                };
                let current = values.get(field.name).cloned().unwrap_or_default();

                html! {
                    <div>
                        <label
                            for={field.name}
                            class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1"
                        >
                            {field.label}
                        </label>
                        <input
                            id={field.name}
                            name={field.name}
                            type={field.kind.as_input_type()}
                            required={field.required}
                            value={current}
                            {oninput}
                            class="w-full px-4 py-3 bg-white dark:bg-gray-900 border border-gray-300 dark:border-gray-600 rounded-lg text-gray-900 dark:text-white focus:outline-none focus:border-blue-400 transition-all"
                        />
                    </div>
                }
            })}
            <button
                type="submit"
                disabled={props.busy}
                class="w-full px-4 py-3 bg-gradient-to-r from-blue-500 to-purple-600 hover:from-blue-600 hover:to-purple-700 text-white rounded-lg font-medium transition-all disabled:opacity-50 disabled:cursor-not-allowed"
            >
                {props.submit_text.clone()}
            </button>
        </form>
    }
}
