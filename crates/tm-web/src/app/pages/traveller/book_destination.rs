use std::collections::HashMap;

use dioxus::prelude::*;
use futures::future::try_join;
use tm_types::{
    bookings::{NewDestinationBooking, stay_estimate, stay_nights}, catalog::{Destination, Hotel}, validation::{StayInput, parse_form_date}
};

use crate::{
    Routes, app::{
        api::{
            bookings::book_destination, destinations::{destination_hotels, get_destination}, use_api
        }, auth::{guard::AccessPolicy, hooks::use_current_user}, utils::{format_price, today}
    }, components::{ErrorPanel, FieldError, Layout, LoadingPanel, RequireRole, field_error, use_toast}
};

#[component]
pub fn BookDestinationPage(id: i64) -> Element {
    rsx! {
        Layout { title: "Book a stay",
            RequireRole { policy: AccessPolicy::TRAVELLER_ONLY,
                BookDestination { id }
            }
        }
    }
}

#[component]
fn BookDestination(id: i64) -> Element {
    let api = use_api();

    let mut resource = use_resource(use_reactive!(|id| {
        let api = api.clone();
        async move { try_join(get_destination(&api, id), destination_hotels(&api, id)).await }
    }));

    match resource() {
        None => rsx! { LoadingPanel {} },
        Some(Err(e)) => rsx! { ErrorPanel { error: e, on_retry: move |_| resource.restart() } },
        Some(Ok((destination, hotels))) => rsx! { StayForm { destination, hotels } },
    }
}

#[component]
fn StayForm(destination: Destination, hotels: Vec<Hotel>) -> Element {
    let user = use_current_user();
    let api = use_api();
    let toast = use_toast();
    let nav = navigator();

    let mut hotel_id = use_signal(|| None::<i64>);
    let mut travel_date = use_signal(String::new);
    let mut return_date = use_signal(String::new);
    let mut travellers = use_signal(|| 1u32);
    let mut errors = use_signal(HashMap::new);
    let mut submitting = use_signal(|| false);

    let input = StayInput {
        hotel_id: hotel_id(),
        travel_date: parse_form_date(&travel_date()),
        return_date: parse_form_date(&return_date()),
        travellers: travellers(),
    };
    let selected = hotels.iter().find(|h| Some(h.id) == input.hotel_id).cloned();
    let estimate = match (&selected, input.travel_date, input.return_date) {
        (Some(hotel), Some(travel), Some(ret)) if ret > travel => Some((
            stay_nights(travel, ret),
            stay_estimate(hotel.price_per_night, travel, ret, input.travellers),
        )),
        _ => None,
    };

    let on_submit = {
        let input = input.clone();
        let destination_id = destination.id;
        move |evt: Event<FormData>| {
            evt.prevent_default();
            if submitting() {
                return;
            }

            let field_errors = input.validate(today());
            if !field_errors.is_empty() {
                errors.set(field_errors);
                return;
            }
            errors.set(HashMap::new());

            let (Some(user), Some(hotel_id), Some(travel), Some((_, total))) = (user.clone(), input.hotel_id, input.travel_date, estimate) else {
                return;
            };
            submitting.set(true);

            let booking = NewDestinationBooking {
                user_id: user.id,
                username: user.username.clone(),
                destination_id,
                hotel_id,
                travel_date: travel,
                total_price: total,
            };
            let api = api.clone();

            spawn(async move {
                match book_destination(&api, &booking).await {
                    Ok(confirmation) => {
                        tracing::info!(destination = booking.destination_id, hotel = booking.hotel_id, "stay booked");
                        toast.success(confirmation.message.unwrap_or_else(|| "Stay booked".to_string()));
                        nav.push(Routes::MyBookingsPage {});
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "destination booking failed");
                        toast.error(e.user_message());
                    }
                }
                submitting.set(false);
            });
        }
    };

    let errs = errors();
    let min_date = today().format("%Y-%m-%d").to_string();

    rsx! {
        div { class: "card bg-base-100 shadow-xl max-w-xl mx-auto",
            form { class: "card-body", onsubmit: on_submit,
                h1 { class: "card-title", "Stay in {destination.name}" }
                p { class: "opacity-70", "{destination.country}" }

                if hotels.is_empty() {
                    div { class: "alert alert-warning", "This destination has no hotels to book yet." }
                }

                div { class: "form-control",
                    label { class: "label", span { class: "label-text", "Hotel" } }
                    select {
                        class: "select select-bordered",
                        onchange: move |evt| hotel_id.set(evt.value().parse().ok()),
                        option { value: "", selected: hotel_id().is_none(), "Select a hotel" }
                        for hotel in hotels.iter() {
                            option {
                                key: "{hotel.id}",
                                value: "{hotel.id}",
                                selected: hotel_id() == Some(hotel.id),
                                "{hotel.name} ({format_price(hotel.price_per_night)} / night)"
                            }
                        }
                    }
                    FieldError { message: field_error(&errs, "hotel") }
                }
                div { class: "grid grid-cols-2 gap-4",
                    div { class: "form-control",
                        label { class: "label", span { class: "label-text", "Travel date" } }
                        input {
                            r#type: "date",
                            min: "{min_date}",
                            class: "input input-bordered",
                            value: "{travel_date}",
                            oninput: move |evt| travel_date.set(evt.value()),
                        }
                        FieldError { message: field_error(&errs, "travel_date") }
                    }
                    div { class: "form-control",
                        label { class: "label", span { class: "label-text", "Return date" } }
                        input {
                            r#type: "date",
                            min: "{travel_date}",
                            class: "input input-bordered",
                            value: "{return_date}",
                            oninput: move |evt| return_date.set(evt.value()),
                        }
                        FieldError { message: field_error(&errs, "return_date") }
                    }
                }
                div { class: "form-control",
                    label { class: "label", span { class: "label-text", "Travellers" } }
                    input {
                        r#type: "number",
                        min: "1",
                        class: "input input-bordered",
                        value: "{travellers}",
                        oninput: move |evt| travellers.set(evt.value().parse().unwrap_or(0)),
                    }
                    FieldError { message: field_error(&errs, "travellers") }
                }

                if let Some((nights, total)) = estimate {
                    div { class: "stats shadow mt-2",
                        div { class: "stat",
                            div { class: "stat-title", "Nights" }
                            div { class: "stat-value text-2xl", "{nights}" }
                        }
                        div { class: "stat",
                            div { class: "stat-title", "Estimated total" }
                            div { class: "stat-value text-2xl", "{format_price(total)}" }
                        }
                    }
                }

                div { class: "card-actions justify-end mt-4",
                    Link { to: Routes::DestinationDetailsPage { id: destination.id }, class: "btn btn-ghost", "Back" }
                    button { r#type: "submit", class: "btn btn-primary", disabled: submitting() || hotels.is_empty(),
                        if submitting() {
                            span { class: "loading loading-spinner" }
                        }
                        "Book stay"
                    }
                }
            }
        }
    }
}
