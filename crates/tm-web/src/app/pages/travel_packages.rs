use dioxus::prelude::*;
use tm_types::auth::Role;

use crate::{
    Routes, app::{
        api::{bookings::bookable_packages, use_api}, auth::hooks::use_has_role, utils::format_price
    }, components::{ErrorPanel, Layout, LoadingPanel}
};

/// Public catalogue of bookable packages.
#[component]
pub fn TravelPackagesPage() -> Element {
    let api = use_api();
    let is_traveller = use_has_role(Role::Traveller);

    let mut packages = use_resource(move || {
        let api = api.clone();
        async move { bookable_packages(&api).await }
    });

    rsx! {
        Layout { title: "Travel Packages",
            h1 { class: "text-2xl font-bold mb-4", "Travel Packages" }
            match packages() {
                None => rsx! { LoadingPanel {} },
                Some(Err(e)) => rsx! { ErrorPanel { error: e, on_retry: move |_| packages.restart() } },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    div { class: "alert", "No packages are available right now." }
                },
                Some(Ok(list)) => rsx! {
                    div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
                        for package in list {
                            div { key: "{package.id}", class: "card bg-base-100 shadow",
                                div { class: "card-body",
                                    h2 { class: "card-title", "{package.name}" }
                                    if let Some(agency) = package.travel_agency_name.as_deref() {
                                        p { class: "text-sm opacity-70", "by {agency}" }
                                    }
                                    if let Some(description) = package.description.as_deref() {
                                        p { "{description}" }
                                    }
                                    div { class: "card-actions items-center justify-between mt-2",
                                        span { class: "text-lg font-semibold", "{format_price(package.price)}" }
                                        if is_traveller {
                                            div { class: "flex gap-2",
                                                Link { to: Routes::PackageDetailsPage { id: package.id }, class: "btn btn-sm btn-ghost", "Details" }
                                                Link { to: Routes::BookPackagePage { id: package.id }, class: "btn btn-sm btn-primary", "Book" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
