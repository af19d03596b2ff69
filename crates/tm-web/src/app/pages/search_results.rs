use dioxus::prelude::*;
use tm_types::search::SearchHit;

use crate::{
    Routes, app::{
        api::{search::search, use_api}, utils::format_price
    }, components::{ErrorPanel, Layout, LoadingPanel}
};

#[component]
pub fn SearchResultsPage(query: String) -> Element {
    let api = use_api();

    let mut results = use_resource(use_reactive!(|query| {
        let api = api.clone();
        async move { search(&api, &query).await }
    }));

    rsx! {
        Layout { title: "Search",
            h1 { class: "text-2xl font-bold mb-4", "Results for \"{query}\"" }
            match results() {
                None => rsx! { LoadingPanel { label: "Searching..." } },
                Some(Err(e)) => rsx! { ErrorPanel { error: e, on_retry: move |_| results.restart() } },
                Some(Ok(found)) if found.is_empty() => rsx! {
                    div { class: "alert", "No destinations or packages match your search." }
                },
                Some(Ok(found)) => rsx! {
                    p { class: "text-sm opacity-70", "{found.count()} matches" }
                    if !found.destinations.is_empty() {
                        h2 { class: "text-xl font-semibold mt-4 mb-2", "Destinations ({found.destinations.len()})" }
                        div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
                            for hit in found.destinations.iter().cloned() {
                                HitCard { key: "d-{hit.id}", to: Routes::DestinationDetailsPage { id: hit.id }, hit }
                            }
                        }
                    }
                    if !found.packages.is_empty() {
                        h2 { class: "text-xl font-semibold mt-6 mb-2", "Packages ({found.packages.len()})" }
                        div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
                            for hit in found.packages.iter().cloned() {
                                HitCard { key: "p-{hit.id}", to: Routes::PackageDetailsPage { id: hit.id }, hit }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn HitCard(hit: SearchHit, to: Routes) -> Element {
    let subtitle = hit
        .country
        .clone()
        .or_else(|| hit.travel_agency_name.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "card bg-base-100 shadow",
            div { class: "card-body",
                h3 { class: "card-title", "{hit.name}" }
                if !subtitle.is_empty() {
                    p { class: "text-sm opacity-70", "{subtitle}" }
                }
                if let Some(description) = hit.description.as_deref() {
                    p { "{description}" }
                }
                div { class: "flex gap-2 text-sm",
                    if let Some(price) = hit.price {
                        span { class: "badge badge-primary", "{format_price(price)}" }
                    }
                    if hit.hotel_count > 0 {
                        span { class: "badge badge-ghost", "{hit.hotel_count} hotels" }
                    }
                    if hit.restaurant_count > 0 {
                        span { class: "badge badge-ghost", "{hit.restaurant_count} restaurants" }
                    }
                }
                div { class: "card-actions justify-end",
                    Link { to, class: "btn btn-sm btn-primary", "View details" }
                }
            }
        }
    }
}
