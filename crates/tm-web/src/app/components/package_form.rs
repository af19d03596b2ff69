use std::collections::HashMap;

use dioxus::prelude::*;
use tm_types::{packages::PackageForm, validation::ValidationError};

use crate::components::{FieldError, field_error};

#[derive(Clone, Copy, PartialEq)]
enum RowKind {
    Hotel,
    Restaurant,
}

impl RowKind {
    fn label(self) -> &'static str {
        match self {
            RowKind::Hotel => "Hotel",
            RowKind::Restaurant => "Restaurant",
        }
    }

    fn rows(self, form: &mut PackageForm) -> &mut Vec<String> {
        match self {
            RowKind::Hotel => &mut form.hotels,
            RowKind::Restaurant => &mut form.restaurants,
        }
    }
}

/// Inputs shared by the create and edit package pages.
#[component]
pub fn PackageFormFields(mut form: Signal<PackageForm>, errors: Signal<HashMap<String, ValidationError>>) -> Element {
    let current = form();
    let errs = errors();

    rsx! {
        div { class: "form-control w-full",
            label { class: "label", span { class: "label-text", "Package Name" } }
            input {
                class: "input input-bordered w-full",
                value: "{current.package_name}",
                oninput: move |evt| form.write().package_name = evt.value(),
            }
            FieldError { message: field_error(&errs, "package_name") }
        }
        div { class: "form-control w-full",
            label { class: "label", span { class: "label-text", "Destination" } }
            input {
                class: "input input-bordered w-full",
                value: "{current.destination}",
                oninput: move |evt| form.write().destination = evt.value(),
            }
            FieldError { message: field_error(&errs, "destination") }
        }
        div { class: "form-control w-full",
            label { class: "label", span { class: "label-text", "Price ($)" } }
            input {
                r#type: "number",
                min: "0",
                step: "0.01",
                class: "input input-bordered w-full",
                value: "{current.price}",
                oninput: move |evt| form.write().price = evt.value(),
            }
            FieldError { message: field_error(&errs, "price") }
        }

        PackageRows { form, kind: RowKind::Restaurant, rows: current.restaurants.clone() }
        PackageRows { form, kind: RowKind::Hotel, rows: current.hotels.clone() }
    }
}

#[component]
fn PackageRows(mut form: Signal<PackageForm>, kind: RowKind, rows: Vec<String>) -> Element {
    let label = kind.label();

    rsx! {
        h3 { class: "text-lg font-semibold mt-4", "{label}s" }
        for (index, value) in rows.into_iter().enumerate() {
            div { key: "{label}-{index}", class: "flex gap-2 mt-2",
                input {
                    class: "input input-bordered input-sm flex-1",
                    placeholder: "{label} {index + 1}",
                    value: "{value}",
                    oninput: move |evt| {
                        if let Some(row) = kind.rows(&mut form.write()).get_mut(index) {
                            *row = evt.value();
                        }
                    },
                }
                button {
                    r#type: "button",
                    class: "btn btn-sm btn-ghost",
                    onclick: move |_| {
                        let mut form = form.write();
                        let rows = kind.rows(&mut form);
                        if index < rows.len() {
                            rows.remove(index);
                        }
                    },
                    "✕"
                }
            }
        }
        button {
            r#type: "button",
            class: "btn btn-sm btn-outline mt-2",
            onclick: move |_| kind.rows(&mut form.write()).push(String::new()),
            "Add {label}"
        }
    }
}
