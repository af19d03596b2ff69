use std::collections::HashMap;

use dioxus::prelude::*;
use tm_types::{
    auth::Identity, catalog::{Destination, DestinationForm}, validation::{ValidationError, validate_destination}
};

use crate::{
    Routes, app::{
        api::{
            destinations::{create_destination, delete_destination, list_destinations, update_destination}, use_api
        }, auth::{guard::AccessPolicy, hooks::use_current_user}
    }, components::{ConfirmDialog, ErrorPanel, FieldError, Layout, LoadingPanel, Modal, RequireRole, field_error, use_toast}
};

#[component]
pub fn AddDestinationPage() -> Element {
    let user = use_current_user();

    rsx! {
        Layout { title: "Add destination",
            RequireRole { policy: AccessPolicy::ADMIN_ONLY,
                if let Some(user) = user {
                    AddDestination { user }
                }
            }
        }
    }
}

#[component]
pub fn ViewDestinationsPage() -> Element {
    let user = use_current_user();

    rsx! {
        Layout { title: "Destinations",
            RequireRole { policy: AccessPolicy::ADMIN_ONLY,
                if let Some(user) = user {
                    DestinationTable { user }
                }
            }
        }
    }
}

/// Inputs shared by the add page and the edit dialog.
#[component]
fn DestinationFields(mut form: Signal<DestinationForm>, errors: Signal<HashMap<String, ValidationError>>) -> Element {
    let current = form();
    let errs = errors();

    rsx! {
        div { class: "form-control",
            label { class: "label", span { class: "label-text", "Name" } }
            input {
                class: "input input-bordered",
                value: "{current.name}",
                oninput: move |evt| form.write().name = evt.value(),
            }
            FieldError { message: field_error(&errs, "name") }
        }
        div { class: "form-control",
            label { class: "label", span { class: "label-text", "Country" } }
            input {
                class: "input input-bordered",
                value: "{current.country}",
                oninput: move |evt| form.write().country = evt.value(),
            }
            FieldError { message: field_error(&errs, "country") }
        }
        div { class: "form-control",
            label { class: "label", span { class: "label-text", "Description" } }
            textarea {
                class: "textarea textarea-bordered h-24",
                value: "{current.description}",
                oninput: move |evt| form.write().description = evt.value(),
            }
        }
    }
}

#[component]
fn AddDestination(user: Identity) -> Element {
    let api = use_api();
    let toast = use_toast();
    let nav = navigator();

    let form = use_signal(DestinationForm::default);
    let mut errors = use_signal(HashMap::new);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let values = form();
        let field_errors = validate_destination(&values);
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(HashMap::new());
        submitting.set(true);
        let api = api.clone();
        let username = user.username.clone();

        spawn(async move {
            match create_destination(&api, &values, &username).await {
                Ok(()) => {
                    tracing::info!(destination = %values.name, "destination created");
                    toast.success("Destination added");
                    nav.push(Routes::ViewDestinationsPage {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "destination creation failed");
                    toast.error(e.user_message());
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "card bg-base-100 shadow-xl max-w-xl mx-auto",
            form { class: "card-body", onsubmit: on_submit,
                h1 { class: "card-title", "Add Destination" }
                DestinationFields { form, errors }
                div { class: "card-actions justify-end mt-4",
                    Link { to: Routes::ViewDestinationsPage {}, class: "btn btn-ghost", "Cancel" }
                    button { r#type: "submit", class: "btn btn-primary", disabled: submitting(), "Add Destination" }
                }
            }
        }
    }
}

#[component]
fn DestinationTable(user: Identity) -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut editing = use_signal(|| None::<i64>);
    let mut form = use_signal(DestinationForm::default);
    let mut errors = use_signal(HashMap::new);
    let mut deleting = use_signal(|| None::<Destination>);
    let mut busy = use_signal(|| false);

    let mut destinations = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { list_destinations(&api).await }
        }
    });

    let save = {
        let api = api.clone();
        move |_: MouseEvent| {
            let Some(id) = editing() else {
                return;
            };
            let values = form();
            let field_errors = validate_destination(&values);
            if !field_errors.is_empty() {
                errors.set(field_errors);
                return;
            }
            errors.set(HashMap::new());
            busy.set(true);
            let api = api.clone();
            let username = user.username.clone();

            spawn(async move {
                match update_destination(&api, id, &values, &username).await {
                    Ok(()) => {
                        tracing::info!(destination = id, "destination updated");
                        toast.success("Destination updated");
                        editing.set(None);
                        destinations.restart();
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, destination = id, "destination update failed");
                        toast.error(e.user_message());
                    }
                }
                busy.set(false);
            });
        }
    };

    let confirm_delete = move |_: ()| {
        let Some(destination) = deleting() else {
            return;
        };
        busy.set(true);
        let api = api.clone();
        spawn(async move {
            match delete_destination(&api, destination.id).await {
                Ok(()) => {
                    tracing::info!(destination = destination.id, "destination deleted");
                    toast.success("Destination deleted");
                    destinations.restart();
                }
                Err(e) => {
                    tracing::warn!(error = %e, destination = destination.id, "destination delete failed");
                    toast.error(e.user_message());
                }
            }
            deleting.set(None);
            busy.set(false);
        });
    };

    let pending_name = deleting().map(|d| d.name).unwrap_or_default();

    rsx! {
        div { class: "flex items-center justify-between mb-4",
            h1 { class: "text-2xl font-bold", "Destinations" }
            Link { to: Routes::AddDestinationPage {}, class: "btn btn-sm btn-primary", "Add Destination" }
        }

        match destinations() {
            None => rsx! { LoadingPanel {} },
            Some(Err(e)) => rsx! { ErrorPanel { error: e, on_retry: move |_| destinations.restart() } },
            Some(Ok(list)) if list.is_empty() => rsx! {
                div { class: "alert", "No destinations yet." }
            },
            Some(Ok(list)) => rsx! {
                div { class: "overflow-x-auto",
                    table { class: "table table-zebra",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Country" }
                                th { "Description" }
                                th {}
                            }
                        }
                        tbody {
                            for destination in list {
                                tr { key: "{destination.id}",
                                    td { class: "font-semibold", "{destination.name}" }
                                    td { "{destination.country}" }
                                    td { class: "max-w-md truncate", {destination.description.clone().unwrap_or_default()} }
                                    td { class: "flex gap-2 justify-end",
                                        button {
                                            class: "btn btn-xs btn-outline",
                                            onclick: {
                                                let destination = destination.clone();
                                                move |_| {
                                                    form.set(DestinationForm::from_destination(&destination));
                                                    errors.set(HashMap::new());
                                                    editing.set(Some(destination.id));
                                                }
                                            },
                                            "Edit"
                                        }
                                        button {
                                            class: "btn btn-xs btn-error btn-outline",
                                            onclick: {
                                                let destination = destination.clone();
                                                move |_| deleting.set(Some(destination.clone()))
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }

        Modal {
            open: editing().is_some(),
            on_close: move |_| editing.set(None),
            title: "Edit destination",
            actions: rsx! {
                button { class: "btn btn-primary", disabled: busy(), onclick: save, "Save" }
            },
            DestinationFields { form, errors }
        }

        ConfirmDialog {
            open: deleting().is_some(),
            title: "Delete destination",
            confirm_label: "Delete",
            busy: busy(),
            on_confirm: confirm_delete,
            on_close: move |_| deleting.set(None),
            p { "Delete \"{pending_name}\"? This cannot be undone." }
        }
    }
}
