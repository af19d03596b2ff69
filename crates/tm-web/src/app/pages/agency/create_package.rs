use std::collections::HashMap;

use dioxus::prelude::*;
use tm_types::{packages::PackageForm, validation::{format_errors, validate_package}};

use crate::{
    Routes, app::{
        api::{packages::create_package, use_api}, auth::{guard::AccessPolicy, hooks::use_current_user}
    }, components::{Layout, PackageFormFields, RequireRole, use_toast}
};

#[component]
pub fn CreatePackagePage() -> Element {
    rsx! {
        Layout { title: "Create package",
            RequireRole { policy: AccessPolicy::AGENCY_ONLY,
                CreatePackage {}
            }
        }
    }
}

#[component]
fn CreatePackage() -> Element {
    let user = use_current_user();
    let api = use_api();
    let toast = use_toast();
    let nav = navigator();

    let form = use_signal(|| PackageForm {
        hotels: vec![String::new()],
        restaurants: vec![String::new()],
        ..Default::default()
    });
    let mut errors = use_signal(HashMap::new);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let Some(user) = user.clone() else {
            return;
        };
        if submitting() {
            return;
        }

        let values = form();
        let field_errors = validate_package(&values);
        if !field_errors.is_empty() {
            tracing::debug!(errors = %format_errors(&field_errors), "form rejected");
            errors.set(field_errors);
            return;
        }
        errors.set(HashMap::new());
        submitting.set(true);
        let api = api.clone();

        spawn(async move {
            match create_package(&api, &values, &user.username).await {
                Ok(()) => {
                    tracing::info!(package = %values.package_name, "package created");
                    toast.success("Package created");
                    nav.push(Routes::ViewPackagesPage {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "package creation failed");
                    toast.error(e.user_message());
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "card bg-base-100 shadow-xl max-w-2xl mx-auto",
            form { class: "card-body", onsubmit: on_submit,
                h1 { class: "card-title", "Create Package" }
                PackageFormFields { form, errors }
                div { class: "card-actions justify-end mt-4",
                    Link { to: Routes::ViewPackagesPage {}, class: "btn btn-ghost", "Cancel" }
                    button { r#type: "submit", class: "btn btn-primary", disabled: submitting(),
                        if submitting() {
                            span { class: "loading loading-spinner" }
                        }
                        "Create Package"
                    }
                }
            }
        }
    }
}
