use std::collections::HashMap;

use dioxus::prelude::*;
use tm_types::{
    packages::{PackageForm, TravelPackage}, validation::{format_errors, validate_package}
};

use crate::{
    Routes, app::{
        api::{
            packages::{get_package, update_package}, use_api
        }, auth::{guard::AccessPolicy, hooks::use_current_user}
    }, components::{ErrorPanel, Layout, LoadingPanel, PackageFormFields, RequireRole, use_toast}
};

#[component]
pub fn EditPackagePage(id: i64) -> Element {
    rsx! {
        Layout { title: "Edit package",
            RequireRole { policy: AccessPolicy::AGENCY_ONLY,
                EditPackage { id }
            }
        }
    }
}

#[component]
fn EditPackage(id: i64) -> Element {
    let api = use_api();

    let mut resource = use_resource(use_reactive!(|id| {
        let api = api.clone();
        async move { get_package(&api, id).await }
    }));

    match resource() {
        None => rsx! { LoadingPanel {} },
        Some(Err(e)) => rsx! { ErrorPanel { error: e, on_retry: move |_| resource.restart() } },
        Some(Ok(package)) => rsx! { EditForm { key: "{package.id}", package } },
    }
}

#[component]
fn EditForm(package: TravelPackage) -> Element {
    let user = use_current_user();
    let api = use_api();
    let toast = use_toast();
    let nav = navigator();

    let id = package.id;
    let form = use_signal(|| PackageForm::from_package(&package));
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
            match update_package(&api, id, &values, &user.username).await {
                Ok(()) => {
                    tracing::info!(package = id, "package updated");
                    toast.success("Package updated");
                    nav.push(Routes::ViewPackagesPage {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, package = id, "package update failed");
                    toast.error(e.user_message());
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "card bg-base-100 shadow-xl max-w-2xl mx-auto",
            form { class: "card-body", onsubmit: on_submit,
                h1 { class: "card-title", "Edit {package.name}" }
                PackageFormFields { form, errors }
                div { class: "card-actions justify-end mt-4",
                    Link { to: Routes::ViewPackagesPage {}, class: "btn btn-ghost", "Cancel" }
                    button { r#type: "submit", class: "btn btn-primary", disabled: submitting(),
                        if submitting() {
                            span { class: "loading loading-spinner" }
                        }
                        "Save Changes"
                    }
                }
            }
        }
    }
}
