use dioxus::prelude::*;

use crate::{
    Routes, app::{
        api::{packages::get_package, use_api}, auth::guard::AccessPolicy, utils::format_price
    }, components::{ErrorPanel, Layout, LoadingPanel, RequireRole}
};

#[component]
pub fn PackageDetailsPage(id: i64) -> Element {
    rsx! {
        Layout { title: "Package",
            RequireRole { policy: AccessPolicy::TRAVELLER_ONLY,
                PackageDetails { id }
            }
        }
    }
}

#[component]
fn PackageDetails(id: i64) -> Element {
    let api = use_api();

    let mut resource = use_resource(use_reactive!(|id| {
        let api = api.clone();
        async move { get_package(&api, id).await }
    }));

    let package = match resource() {
        None => return rsx! { LoadingPanel {} },
        Some(Err(e)) => return rsx! { ErrorPanel { error: e, on_retry: move |_| resource.restart() } },
        Some(Ok(package)) => package,
    };

    rsx! {
        div { class: "card bg-base-100 shadow-xl",
            div { class: "card-body",
                h1 { class: "card-title text-3xl", "{package.name}" }
                if let Some(agency) = package.travel_agency_name.as_deref() {
                    p { class: "opacity-70", "Offered by {agency}" }
                }
                if let Some(destination) = package.destination() {
                    p { span { class: "font-semibold", "Destination: " } "{destination}" }
                } else if let Some(description) = package.description.as_deref() {
                    p { "{description}" }
                }
                p { class: "text-2xl font-semibold my-2", "{format_price(package.price)}" }

                div { class: "grid gap-4 md:grid-cols-2",
                    div {
                        h2 { class: "font-semibold", "Hotels" }
                        if package.hotels.is_empty() {
                            p { class: "opacity-70", "None included" }
                        }
                        ul { class: "list-disc ml-5",
                            for hotel in package.hotels.iter() {
                                li { key: "{hotel.id}", "{hotel.name}" }
                            }
                        }
                    }
                    div {
                        h2 { class: "font-semibold", "Restaurants" }
                        if package.restaurants.is_empty() {
                            p { class: "opacity-70", "None included" }
                        }
                        ul { class: "list-disc ml-5",
                            for restaurant in package.restaurants.iter() {
                                li { key: "{restaurant.id}", "{restaurant.name}" }
                            }
                        }
                    }
                }

                div { class: "card-actions justify-end mt-4",
                    Link { to: Routes::TravelPackagesPage {}, class: "btn btn-ghost", "Back" }
                    Link { to: Routes::BookPackagePage { id }, class: "btn btn-primary", "Book this package" }
                }
            }
        }
    }
}
