use std::collections::HashMap;

use dioxus::prelude::*;
use tm_types::{
    auth::Identity, catalog::{Hotel, HotelForm}, validation::{ValidationError, validate_hotel}
};

use super::destination_select::DestinationSelect;
use crate::{
    Routes, app::{
        api::{
            hotels::{create_hotel, delete_hotel, list_hotels, update_hotel}, use_api
        }, auth::{guard::AccessPolicy, hooks::use_current_user}, utils::format_price
    }, components::{ConfirmDialog, ErrorPanel, FieldError, Layout, LoadingPanel, Modal, RequireRole, field_error, use_toast}
};

#[component]
pub fn AddHotelPage() -> Element {
    let user = use_current_user();

    rsx! {
        Layout { title: "Add hotel",
            RequireRole { policy: AccessPolicy::ADMIN_ONLY,
                if let Some(user) = user {
                    AddHotel { user }
                }
            }
        }
    }
}

#[component]
pub fn ViewHotelsPage() -> Element {
    let user = use_current_user();

    rsx! {
        Layout { title: "Hotels",
            RequireRole { policy: AccessPolicy::ADMIN_ONLY,
                if let Some(user) = user {
                    HotelTable { user }
                }
            }
        }
    }
}

#[component]
fn HotelFields(mut form: Signal<HotelForm>, errors: Signal<HashMap<String, ValidationError>>) -> Element {
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
            label { class: "label", span { class: "label-text", "Location" } }
            input {
                class: "input input-bordered",
                value: "{current.location}",
                oninput: move |evt| form.write().location = evt.value(),
            }
            FieldError { message: field_error(&errs, "location") }
        }
        div { class: "form-control",
            label { class: "label", span { class: "label-text", "Address" } }
            input {
                class: "input input-bordered",
                value: "{current.address}",
                oninput: move |evt| form.write().address = evt.value(),
            }
            FieldError { message: field_error(&errs, "address") }
        }
        div { class: "form-control",
            label { class: "label", span { class: "label-text", "Price per night ($)" } }
            input {
                r#type: "number",
                min: "0",
                step: "0.01",
                class: "input input-bordered",
                value: "{current.price_per_night}",
                oninput: move |evt| form.write().price_per_night = evt.value(),
            }
            FieldError { message: field_error(&errs, "price_per_night") }
        }
        DestinationSelect {
            selected: current.destination_id,
            on_change: move |id| form.write().destination_id = id,
        }
    }
}

#[component]
fn AddHotel(user: Identity) -> Element {
    let api = use_api();
    let toast = use_toast();
    let nav = navigator();

    let form = use_signal(HotelForm::default);
    let mut errors = use_signal(HashMap::new);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let values = form();
        let field_errors = validate_hotel(&values);
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(HashMap::new());
        submitting.set(true);
        let api = api.clone();
        let username = user.username.clone();

        spawn(async move {
            match create_hotel(&api, &values, &username).await {
                Ok(()) => {
                    tracing::info!(hotel = %values.name, "hotel created");
                    toast.success("Hotel added");
                    nav.push(Routes::ViewHotelsPage {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "hotel creation failed");
                    toast.error(e.user_message());
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "card bg-base-100 shadow-xl max-w-xl mx-auto",
            form { class: "card-body", onsubmit: on_submit,
                h1 { class: "card-title", "Add Hotel" }
                HotelFields { form, errors }
                div { class: "card-actions justify-end mt-4",
                    Link { to: Routes::ViewHotelsPage {}, class: "btn btn-ghost", "Cancel" }
                    button { r#type: "submit", class: "btn btn-primary", disabled: submitting(), "Add Hotel" }
                }
            }
        }
    }
}

#[component]
fn HotelTable(user: Identity) -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut editing = use_signal(|| None::<i64>);
    let mut form = use_signal(HotelForm::default);
    let mut errors = use_signal(HashMap::new);
    let mut deleting = use_signal(|| None::<Hotel>);
    let mut busy = use_signal(|| false);

    let mut hotels = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { list_hotels(&api).await }
        }
    });

    let save = {
        let api = api.clone();
        move |_: MouseEvent| {
            let Some(id) = editing() else {
                return;
            };
            let values = form();
            let field_errors = validate_hotel(&values);
            if !field_errors.is_empty() {
                errors.set(field_errors);
                return;
            }
            errors.set(HashMap::new());
            busy.set(true);
            let api = api.clone();
            let username = user.username.clone();

            spawn(async move {
                match update_hotel(&api, id, &values, &username).await {
                    Ok(()) => {
                        tracing::info!(hotel = id, "hotel updated");
                        toast.success("Hotel updated");
                        editing.set(None);
                        hotels.restart();
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, hotel = id, "hotel update failed");
                        toast.error(e.user_message());
                    }
                }
                busy.set(false);
            });
        }
    };

    let confirm_delete = move |_: ()| {
        let Some(hotel) = deleting() else {
            return;
        };
        busy.set(true);
        let api = api.clone();
        spawn(async move {
            match delete_hotel(&api, hotel.id).await {
                Ok(()) => {
                    tracing::info!(hotel = hotel.id, "hotel deleted");
                    toast.success("Hotel deleted");
                    hotels.restart();
                }
                Err(e) => {
                    tracing::warn!(error = %e, hotel = hotel.id, "hotel delete failed");
                    toast.error(e.user_message());
                }
            }
            deleting.set(None);
            busy.set(false);
        });
    };

    let pending_name = deleting().map(|h| h.name).unwrap_or_default();

    rsx! {
        div { class: "flex items-center justify-between mb-4",
            h1 { class: "text-2xl font-bold", "Hotels" }
            Link { to: Routes::AddHotelPage {}, class: "btn btn-sm btn-primary", "Add Hotel" }
        }

        match hotels() {
            None => rsx! { LoadingPanel {} },
            Some(Err(e)) => rsx! { ErrorPanel { error: e, on_retry: move |_| hotels.restart() } },
            Some(Ok(list)) if list.is_empty() => rsx! {
                div { class: "alert", "No hotels yet." }
            },
            Some(Ok(list)) => rsx! {
                div { class: "overflow-x-auto",
                    table { class: "table table-zebra",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Location" }
                                th { "Address" }
                                th { "Per night" }
                                th {}
                            }
                        }
                        tbody {
                            for hotel in list {
                                tr { key: "{hotel.id}",
                                    td { class: "font-semibold", "{hotel.name}" }
                                    td { "{hotel.location}" }
                                    td { "{hotel.address}" }
                                    td { "{format_price(hotel.price_per_night)}" }
                                    td { class: "flex gap-2 justify-end",
                                        button {
                                            class: "btn btn-xs btn-outline",
                                            onclick: {
                                                let hotel = hotel.clone();
                                                move |_| {
                                                    form.set(HotelForm::from_hotel(&hotel, None));
                                                    errors.set(HashMap::new());
                                                    editing.set(Some(hotel.id));
                                                }
                                            },
                                            "Edit"
                                        }
                                        button {
                                            class: "btn btn-xs btn-error btn-outline",
                                            onclick: {
                                                let hotel = hotel.clone();
                                                move |_| deleting.set(Some(hotel.clone()))
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
            title: "Edit hotel",
            actions: rsx! {
                button { class: "btn btn-primary", disabled: busy(), onclick: save, "Save" }
            },
            HotelFields { form, errors }
        }

        ConfirmDialog {
            open: deleting().is_some(),
            title: "Delete hotel",
            confirm_label: "Delete",
            busy: busy(),
            on_confirm: confirm_delete,
            on_close: move |_| deleting.set(None),
            p { "Delete \"{pending_name}\"? This cannot be undone." }
        }
    }
}
