//! Contact Form Component

use dioxus::prelude::*;
use folio_core::markup::ids;
use folio_core::{FieldName, PageEvent};
use folio_ui::FormField;

use crate::context::{use_dispatcher, use_page};

/// Name, email and message fields validated by the page model.
///
/// Native browser validation is disabled so every message comes from the
/// same rules on input and on submit.
#[component]
pub fn ContactForm() -> Element {
    let page = use_page();
    let dispatcher = use_dispatcher();

    let fields: Vec<_> = {
        let page = page.read();
        FieldName::ALL
            .iter()
            .map(|&field| {
                (
                    field,
                    page.contact().value(field).to_string(),
                    page.contact().validation(field),
                )
            })
            .collect()
    };

    rsx! {
        section { id: ids::CONTACT, class: "contact",
            h2 { class: "section-title", "Get in touch" }

            form {
                id: ids::CONTACT_FORM,
                novalidate: true,
                onsubmit: move |e: FormEvent| {
                    if dispatcher.dispatch(PageEvent::Submit) {
                        e.prevent_default();
                    }
                },

                for (field, value, validation) in fields {
                    FormField {
                        key: "{field}",
                        field,
                        value,
                        validation,
                        multiline: field == FieldName::Message,
                        placeholder: placeholder(field).to_string(),
                        oninput: move |v: String| {
                            dispatcher.dispatch(PageEvent::input(field, v));
                        },
                    }
                }

                button { class: "btn-primary", r#type: "submit", "Send message" }
            }
        }
    }
}

fn placeholder(field: FieldName) -> &'static str {
    match field {
        FieldName::Name => "Your name",
        FieldName::Email => "you@example.com",
        FieldName::Message => "What would you like to talk about?",
    }
}
