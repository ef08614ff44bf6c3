//! Validated Form Field Component
//!
//! A labelled input or textarea immediately followed by its error display.
//! The field carries the `invalid` class while its validation fails.

use dioxus::prelude::*;
use folio_core::{FieldName, FieldValidation};

/// Properties for the FormField component
#[derive(Clone, PartialEq, Props)]
pub struct FormFieldProps {
    /// Which contact field this is
    pub field: FieldName,
    /// Current value
    pub value: String,
    /// Current validation state
    pub validation: FieldValidation,
    /// Handler called with the new value on every input
    pub oninput: EventHandler<String>,
    /// Render a textarea instead of a single-line input
    #[props(default = false)]
    pub multiline: bool,
    /// Number of visible rows for a textarea
    #[props(default = 5)]
    pub rows: u32,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
}

/// Contact form field with its error slot
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FormField {
///         field: FieldName::Email,
///         value: contact.value(FieldName::Email).to_string(),
///         validation: contact.validation(FieldName::Email),
///         oninput: move |v| dispatch(PageEvent::input(FieldName::Email, v))
///     }
/// }
/// ```
#[component]
pub fn FormField(props: FormFieldProps) -> Element {
    let id = props.field.as_str();
    let class = field_class(props.validation.invalid);
    let on_input = props.oninput;

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{id}", "{props.field.label()}" }
            if props.multiline {
                textarea {
                    id: "{id}",
                    name: "{id}",
                    class: "{class}",
                    rows: "{props.rows}",
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    "aria-invalid": if props.validation.invalid { "true" } else { "false" },
                    value: "{props.value}",
                    oninput: move |e| on_input.call(e.value()),
                }
            } else {
                input {
                    id: "{id}",
                    name: "{id}",
                    class: "{class}",
                    r#type: input_type(props.field),
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    "aria-invalid": if props.validation.invalid { "true" } else { "false" },
                    value: "{props.value}",
                    oninput: move |e| on_input.call(e.value()),
                }
            }
            span { class: "error-message", role: "alert", "{props.validation.message}" }
        }
    }
}

/// CSS class for the input element.
pub fn field_class(invalid: bool) -> &'static str {
    if invalid {
        "form-input invalid"
    } else {
        "form-input"
    }
}

/// HTML input type for a single-line field.
pub fn input_type(field: FieldName) -> &'static str {
    match field {
        FieldName::Email => "email",
        _ => "text",
    }
}
