use std::collections::HashMap;

use dioxus::prelude::*;
use tm_types::{
    bookings::NewBooking, packages::TravelPackage, validation::{parse_form_date, validate_package_booking}
};

use crate::{
    Routes, app::{
        api::{bookings::book_package, packages::get_package, use_api}, auth::{guard::AccessPolicy, hooks::use_current_user}, utils::{format_date, format_price, today}
    }, components::{ErrorPanel, FieldError, Layout, LoadingPanel, Modal, RequireRole, field_error, use_toast}
};

#[component]
pub fn BookPackagePage(id: i64) -> Element {
    rsx! {
        Layout { title: "Book package",
            RequireRole { policy: AccessPolicy::TRAVELLER_ONLY,
                BookPackage { id }
            }
        }
    }
}

#[component]
fn BookPackage(id: i64) -> Element {
    let api = use_api();

    let mut resource = use_resource(use_reactive!(|id| {
        let api = api.clone();
        async move { get_package(&api, id).await }
    }));

    match resource() {
        None => rsx! { LoadingPanel {} },
        Some(Err(e)) => rsx! { ErrorPanel { error: e, on_retry: move |_| resource.restart() } },
        Some(Ok(package)) => rsx! { BookingForm { package } },
    }
}

#[component]
fn BookingForm(package: TravelPackage) -> Element {
    let user = use_current_user();
    let api = use_api();
    let toast = use_toast();
    let nav = navigator();

    let booking_date = today();
    let mut travel_date = use_signal(String::new);
    let mut errors = use_signal(HashMap::new);
    let mut confirming = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let on_review = move |evt: Event<FormData>| {
        evt.prevent_default();
        let field_errors = validate_package_booking(booking_date, parse_form_date(&travel_date()));
        let valid = field_errors.is_empty();
        errors.set(field_errors);
        confirming.set(valid);
    };

    let confirm = {
        let package = package.clone();
        move |_: MouseEvent| {
            let (Some(user), Some(travel)) = (user.clone(), parse_form_date(&travel_date())) else {
                return;
            };
            if submitting() {
                return;
            }
            submitting.set(true);

            let booking = NewBooking {
                user_id: user.id,
                username: user.username.clone(),
                travel_package_id: package.id,
                booking_date,
                travel_date: travel,
                total_price: package.price,
            };
            let api = api.clone();

            spawn(async move {
                match book_package(&api, &booking).await {
                    Ok(confirmation) => {
                        tracing::info!(package = booking.travel_package_id, booking = ?confirmation.id, "package booked");
                        toast.success(confirmation.message.unwrap_or_else(|| "Booking confirmed".to_string()));
                        nav.push(Routes::MyBookingsPage {});
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "package booking failed");
                        toast.error(e.user_message());
                        confirming.set(false);
                    }
                }
                submitting.set(false);
            });
        }
    };

    let errs = errors();
    let min_date = booking_date.format("%Y-%m-%d").to_string();
    let chosen = format_date(parse_form_date(&travel_date()));

    rsx! {
        div { class: "card bg-base-100 shadow-xl max-w-xl mx-auto",
            form { class: "card-body", onsubmit: on_review,
                h1 { class: "card-title", "Book {package.name}" }
                if let Some(agency) = package.travel_agency_name.as_deref() {
                    p { class: "opacity-70", "Offered by {agency}" }
                }
                p { class: "text-xl font-semibold", "{format_price(package.price)}" }

                div { class: "form-control",
                    label { class: "label", span { class: "label-text", "Booking date" } }
                    input { class: "input input-bordered", disabled: true, value: "{format_date(Some(booking_date))}" }
                }
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

                div { class: "card-actions justify-end mt-4",
                    Link { to: Routes::PackageDetailsPage { id: package.id }, class: "btn btn-ghost", "Back" }
                    button { r#type: "submit", class: "btn btn-primary", "Review booking" }
                }
            }
        }

        Modal {
            open: confirming(),
            on_close: move |_| confirming.set(false),
            title: "Confirm booking",
            actions: rsx! {
                button { class: "btn btn-primary", disabled: submitting(), onclick: confirm,
                    if submitting() {
                        span { class: "loading loading-spinner" }
                    }
                    "Confirm"
                }
            },
            p { "Package: {package.name}" }
            p { "Travel date: {chosen}" }
            p { class: "font-semibold", "Total: {format_price(package.price)}" }
        }
    }
}
