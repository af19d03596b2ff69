use std::collections::HashMap;

use dioxus::prelude::*;
use tm_types::validation::ValidationError;

/// Message for `field`, if validation flagged it.
pub fn field_error(errors: &HashMap<String, ValidationError>, field: &str) -> Option<String> {
    errors.get(field).map(|e| e.to_string())
}

#[component]
pub fn FieldError(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            label { class: "label",
                span { class: "label-text-alt text-error", "{message}" }
            }
        },
        None => rsx! {},
    }
}
