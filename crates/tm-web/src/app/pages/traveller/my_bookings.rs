use dioxus::prelude::*;
use tm_types::{auth::Identity, bookings::Booking};

use crate::{
    Routes, app::{
        api::{
            bookings::{cancel_booking, my_bookings}, use_api
        }, auth::{guard::AccessPolicy, hooks::use_current_user}, utils::{format_date, format_price}
    }, components::{ConfirmDialog, ErrorPanel, Layout, LoadingPanel, RequireRole, use_toast}
};

#[component]
pub fn MyBookingsPage() -> Element {
    let user = use_current_user();

    rsx! {
        Layout { title: "My Bookings",
            RequireRole { policy: AccessPolicy::TRAVELLER_ONLY,
                if let Some(user) = user {
                    BookingList { user }
                }
            }
        }
    }
}

#[component]
fn BookingList(user: Identity) -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut cancelling = use_signal(|| None::<Booking>);
    let mut busy = use_signal(|| false);

    let mut bookings = use_resource({
        let api = api.clone();
        use_reactive!(|user| {
            let api = api.clone();
            async move { my_bookings(&api, &user).await }
        })
    });

    let confirm_cancel = move |_: ()| {
        let Some(booking) = cancelling() else {
            return;
        };
        busy.set(true);
        let api = api.clone();
        spawn(async move {
            match cancel_booking(&api, booking.id).await {
                Ok(()) => {
                    tracing::info!(booking = booking.id, "booking cancelled");
                    toast.success("Booking cancelled");
                    bookings.restart();
                }
                Err(e) => {
                    tracing::warn!(error = %e, booking = booking.id, "cancel failed");
                    toast.error(e.user_message());
                }
            }
            cancelling.set(None);
            busy.set(false);
        });
    };

    let title = cancelling().map(|b| b.title().to_string()).unwrap_or_default();

    rsx! {
        div { class: "flex items-center justify-between mb-4",
            h1 { class: "text-2xl font-bold", "My Bookings" }
            Link { to: Routes::TravelPackagesPage {}, class: "btn btn-sm btn-primary", "Browse packages" }
        }

        match bookings() {
            None => rsx! { LoadingPanel {} },
            Some(Err(e)) => rsx! { ErrorPanel { error: e, on_retry: move |_| bookings.restart() } },
            Some(Ok(list)) if list.is_empty() => rsx! {
                div { class: "alert", "You have no bookings yet." }
            },
            Some(Ok(list)) => rsx! {
                div { class: "overflow-x-auto",
                    table { class: "table table-zebra",
                        thead {
                            tr {
                                th { "Trip" }
                                th { "Booked on" }
                                th { "Travel date" }
                                th { "Total" }
                                th {}
                            }
                        }
                        tbody {
                            for booking in list {
                                tr { key: "{booking.id}",
                                    td {
                                        div { class: "font-semibold", "{booking.title()}" }
                                        if let Some(agency) = booking.travel_package.as_ref().and_then(|p| p.travel_agency_name.as_deref()) {
                                            div { class: "text-sm opacity-60", "{agency}" }
                                        }
                                    }
                                    td { "{format_date(booking.booking_date)}" }
                                    td { "{format_date(booking.travel_date)}" }
                                    td { "{format_price(booking.total_price)}" }
                                    td {
                                        button {
                                            class: "btn btn-xs btn-error btn-outline",
                                            onclick: {
                                                let booking = booking.clone();
                                                move |_| cancelling.set(Some(booking.clone()))
                                            },
                                            "Cancel"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }

        ConfirmDialog {
            open: cancelling().is_some(),
            title: "Cancel booking",
            confirm_label: "Cancel booking",
            busy: busy(),
            on_confirm: confirm_cancel,
            on_close: move |_| cancelling.set(None),
            p { "Cancel your booking for {title}? This cannot be undone." }
        }
    }
}
