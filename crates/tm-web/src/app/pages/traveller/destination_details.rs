use dioxus::prelude::*;
use futures::future::try_join3;

use crate::{
    Routes, app::{
        api::{
            destinations::{destination_hotels, destination_restaurants, get_destination}, use_api
        }, auth::guard::AccessPolicy, utils::format_price
    }, components::{ErrorPanel, Layout, LoadingPanel, RequireRole}
};

#[component]
pub fn DestinationDetailsPage(id: i64) -> Element {
    rsx! {
        Layout { title: "Destination",
            RequireRole { policy: AccessPolicy::TRAVELLER_ONLY,
                DestinationDetails { id }
            }
        }
    }
}

#[component]
fn DestinationDetails(id: i64) -> Element {
    let api = use_api();

    let mut details = use_resource(use_reactive!(|id| {
        let api = api.clone();
        async move {
            try_join3(
                get_destination(&api, id),
                destination_hotels(&api, id),
                destination_restaurants(&api, id),
            )
            .await
        }
    }));

    let (destination, hotels, restaurants) = match details() {
        None => return rsx! { LoadingPanel {} },
        Some(Err(e)) => return rsx! { ErrorPanel { error: e, on_retry: move |_| details.restart() } },
        Some(Ok(loaded)) => loaded,
    };

    rsx! {
        div { class: "flex flex-wrap items-start justify-between gap-4 mb-6",
            div {
                h1 { class: "text-3xl font-bold", "{destination.name}" }
                p { class: "opacity-70", "{destination.country}" }
            }
            Link { to: Routes::BookDestinationPage { id }, class: "btn btn-primary", "Book a stay" }
        }
        if let Some(image) = destination.image_path.as_deref() {
            img { class: "rounded-box max-h-80 w-full object-cover mb-6", src: "{image}", alt: "{destination.name}" }
        }
        if let Some(description) = destination.description.as_deref() {
            p { class: "mb-6", "{description}" }
        }

        div { class: "grid gap-6 md:grid-cols-2",
            section {
                h2 { class: "text-xl font-semibold mb-2", "Hotels" }
                if hotels.is_empty() {
                    p { class: "opacity-70", "No hotels listed yet." }
                }
                ul { class: "menu bg-base-100 rounded-box",
                    for hotel in hotels {
                        li { key: "{hotel.id}",
                            div { class: "flex justify-between",
                                span { "{hotel.name}" span { class: "opacity-60 text-sm ml-2", "{hotel.address}" } }
                                span { class: "badge", "{format_price(hotel.price_per_night)} / night" }
                            }
                        }
                    }
                }
            }
            section {
                h2 { class: "text-xl font-semibold mb-2", "Restaurants" }
                if restaurants.is_empty() {
                    p { class: "opacity-70", "No restaurants listed yet." }
                }
                ul { class: "menu bg-base-100 rounded-box",
                    for restaurant in restaurants {
                        li { key: "{restaurant.id}",
                            div { class: "flex justify-between",
                                span { "{restaurant.name}" span { class: "opacity-60 text-sm ml-2", "{restaurant.address}" } }
                                span { class: "badge badge-ghost", "{restaurant.cuisine}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
