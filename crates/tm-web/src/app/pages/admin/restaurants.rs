use std::collections::HashMap;

use dioxus::prelude::*;
use tm_types::{
    auth::Identity, catalog::{Restaurant, RestaurantForm}, validation::{ValidationError, validate_restaurant}
};

use super::destination_select::DestinationSelect;
use crate::{
    Routes, app::{
        api::{
            restaurants::{create_restaurant, delete_restaurant, list_restaurants, update_restaurant}, use_api
        }, auth::{guard::AccessPolicy, hooks::use_current_user}
    }, components::{ConfirmDialog, ErrorPanel, FieldError, Layout, LoadingPanel, Modal, RequireRole, field_error, use_toast}
};

#[component]
pub fn AddRestaurantPage() -> Element {
    let user = use_current_user();

    rsx! {
        Layout { title: "Add restaurant",
            RequireRole { policy: AccessPolicy::ADMIN_ONLY,
                if let Some(user) = user {
                    AddRestaurant { user }
                }
            }
        }
    }
}

#[component]
pub fn ViewRestaurantsPage() -> Element {
    let user = use_current_user();

    rsx! {
        Layout { title: "Restaurants",
            RequireRole { policy: AccessPolicy::ADMIN_ONLY,
                if let Some(user) = user {
                    RestaurantTable { user }
                }
            }
        }
    }
}

#[component]
fn RestaurantFields(mut form: Signal<RestaurantForm>, errors: Signal<HashMap<String, ValidationError>>) -> Element {
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
            label { class: "label", span { class: "label-text", "Cuisine" } }
            input {
                class: "input input-bordered",
                placeholder: "Portuguese, Italian, ...",
                value: "{current.cuisine}",
                oninput: move |evt| form.write().cuisine = evt.value(),
            }
            FieldError { message: field_error(&errs, "cuisine") }
        }
        div { class: "form-control",
            label { class: "label", span { class: "label-text", "Cuisine type" } }
            input {
                class: "input input-bordered",
                placeholder: "Fine dining, seafood, ...",
                value: "{current.cuisine_type}",
                oninput: move |evt| form.write().cuisine_type = evt.value(),
            }
        }
        DestinationSelect {
            selected: current.destination_id,
            on_change: move |id| form.write().destination_id = id,
        }
    }
}

#[component]
fn AddRestaurant(user: Identity) -> Element {
    let api = use_api();
    let toast = use_toast();
    let nav = navigator();

    let form = use_signal(RestaurantForm::default);
    let mut errors = use_signal(HashMap::new);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let values = form();
        let field_errors = validate_restaurant(&values);
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(HashMap::new());
        submitting.set(true);
        let api = api.clone();
        let username = user.username.clone();

        spawn(async move {
            match create_restaurant(&api, &values, &username).await {
                Ok(()) => {
                    tracing::info!(restaurant = %values.name, "restaurant created");
                    toast.success("Restaurant added");
                    nav.push(Routes::ViewRestaurantsPage {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "restaurant creation failed");
                    toast.error(e.user_message());
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "card bg-base-100 shadow-xl max-w-xl mx-auto",
            form { class: "card-body", onsubmit: on_submit,
                h1 { class: "card-title", "Add Restaurant" }
                RestaurantFields { form, errors }
                div { class: "card-actions justify-end mt-4",
                    Link { to: Routes::ViewRestaurantsPage {}, class: "btn btn-ghost", "Cancel" }
                    button { r#type: "submit", class: "btn btn-primary", disabled: submitting(), "Add Restaurant" }
                }
            }
        }
    }
}

#[component]
fn RestaurantTable(user: Identity) -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut editing = use_signal(|| None::<i64>);
    let mut form = use_signal(RestaurantForm::default);
    let mut errors = use_signal(HashMap::new);
    let mut deleting = use_signal(|| None::<Restaurant>);
    let mut busy = use_signal(|| false);

    let mut restaurants = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { list_restaurants(&api).await }
        }
    });

    let save = {
        let api = api.clone();
        move |_: MouseEvent| {
            let Some(id) = editing() else {
                return;
            };
            let values = form();
            let field_errors = validate_restaurant(&values);
            if !field_errors.is_empty() {
                errors.set(field_errors);
                return;
            }
            errors.set(HashMap::new());
            busy.set(true);
            let api = api.clone();
            let username = user.username.clone();

            spawn(async move {
                match update_restaurant(&api, id, &values, &username).await {
                    Ok(()) => {
                        tracing::info!(restaurant = id, "restaurant updated");
                        toast.success("Restaurant updated");
                        editing.set(None);
                        restaurants.restart();
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, restaurant = id, "restaurant update failed");
                        toast.error(e.user_message());
                    }
                }
                busy.set(false);
            });
        }
    };

    let confirm_delete = move |_: ()| {
        let Some(restaurant) = deleting() else {
            return;
        };
        busy.set(true);
        let api = api.clone();
        spawn(async move {
            match delete_restaurant(&api, restaurant.id).await {
                Ok(()) => {
                    tracing::info!(restaurant = restaurant.id, "restaurant deleted");
                    toast.success("Restaurant deleted");
                    restaurants.restart();
                }
                Err(e) => {
                    tracing::warn!(error = %e, restaurant = restaurant.id, "restaurant delete failed");
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
            h1 { class: "text-2xl font-bold", "Restaurants" }
            Link { to: Routes::AddRestaurantPage {}, class: "btn btn-sm btn-primary", "Add Restaurant" }
        }

        match restaurants() {
            None => rsx! { LoadingPanel {} },
            Some(Err(e)) => rsx! { ErrorPanel { error: e, on_retry: move |_| restaurants.restart() } },
            Some(Ok(list)) if list.is_empty() => rsx! {
                div { class: "alert", "No restaurants yet." }
            },
            Some(Ok(list)) => rsx! {
                div { class: "overflow-x-auto",
                    table { class: "table table-zebra",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Location" }
                                th { "Address" }
                                th { "Cuisine" }
                                th {}
                            }
                        }
                        tbody {
                            for restaurant in list {
                                tr { key: "{restaurant.id}",
                                    td { class: "font-semibold", "{restaurant.name}" }
                                    td { "{restaurant.location}" }
                                    td { "{restaurant.address}" }
                                    td { "{restaurant.cuisine}" }
                                    td { class: "flex gap-2 justify-end",
                                        button {
                                            class: "btn btn-xs btn-outline",
                                            onclick: {
                                                let restaurant = restaurant.clone();
                                                move |_| {
                                                    form.set(RestaurantForm::from_restaurant(&restaurant, None));
                                                    errors.set(HashMap::new());
                                                    editing.set(Some(restaurant.id));
                                                }
                                            },
                                            "Edit"
                                        }
                                        button {
                                            class: "btn btn-xs btn-error btn-outline",
                                            onclick: {
                                                let restaurant = restaurant.clone();
                                                move |_| deleting.set(Some(restaurant.clone()))
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
            title: "Edit restaurant",
            actions: rsx! {
                button { class: "btn btn-primary", disabled: busy(), onclick: save, "Save" }
            },
            RestaurantFields { form, errors }
        }

        ConfirmDialog {
            open: deleting().is_some(),
            title: "Delete restaurant",
            confirm_label: "Delete",
            busy: busy(),
            on_confirm: confirm_delete,
            on_close: move |_| deleting.set(None),
            p { "Delete \"{pending_name}\"? Packages that include it will lose it." }
        }
    }
}
