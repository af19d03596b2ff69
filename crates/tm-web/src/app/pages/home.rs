use dioxus::prelude::*;
use tm_types::auth::Role;

use crate::{
    Routes, app::auth::hooks::use_current_user, components::{Layout, Protected}
};

#[component]
pub fn HomePage() -> Element {
    let user = use_current_user();
    let nav = navigator();
    let mut query = use_signal(String::new);

    let on_search = move |evt: Event<FormData>| {
        evt.prevent_default();
        let q = query().trim().to_string();
        if !q.is_empty() {
            nav.push(Routes::SearchResultsPage { query: q });
        }
    };

    rsx! {
        Layout {
            div { class: "hero min-h-[40vh] bg-base-200 rounded-box",
                div { class: "hero-content text-center",
                    div { class: "max-w-xl",
                        h1 { class: "text-5xl font-bold", "Explore the world" }
                        p { class: "py-6", "Find destinations, compare packages from trusted agencies and book your next trip." }
                        form { class: "join w-full", onsubmit: on_search,
                            input {
                                class: "input input-bordered join-item flex-1",
                                placeholder: "Search destinations or packages",
                                value: "{query}",
                                oninput: move |evt| query.set(evt.value()),
                            }
                            button { r#type: "submit", class: "btn btn-primary join-item", "Search" }
                        }
                    }
                }
            }

            div { class: "grid gap-4 md:grid-cols-3 mt-8",
                if user.is_none() {
                    ActionCard { title: "Browse packages", body: "See what agencies are offering right now.", to: Routes::TravelPackagesPage {} }
                    ActionCard { title: "Create an account", body: "Register as a traveller or as a travel agency.", to: Routes::RegisterPage {} }
                    ActionCard { title: "Sign in", body: "Pick up where you left off.", to: Routes::login_then(String::new()) }
                }
                Protected { roles: vec![Role::Admin],
                    ActionCard { title: "Destinations", body: "Add and maintain destinations.", to: Routes::ViewDestinationsPage {} }
                    ActionCard { title: "Hotels & restaurants", body: "Keep the catalogue up to date.", to: Routes::ViewHotelsPage {} }
                    ActionCard { title: "Complaints", body: "Review and answer traveller complaints.", to: Routes::ManageComplaintsPage {} }
                }
                Protected { roles: vec![Role::TravelAgency],
                    ActionCard { title: "Create a package", body: "Bundle hotels and restaurants into a trip.", to: Routes::CreatePackagePage {} }
                    ActionCard { title: "My packages", body: "Edit or withdraw your offers.", to: Routes::ViewPackagesPage {} }
                }
                Protected { roles: vec![Role::Traveller],
                    ActionCard { title: "Browse packages", body: "Find your next trip.", to: Routes::TravelPackagesPage {} }
                    ActionCard { title: "My bookings", body: "Upcoming trips and cancellations.", to: Routes::MyBookingsPage {} }
                    ActionCard { title: "My complaints", body: "Tell us when something went wrong.", to: Routes::MyComplaintsPage {} }
                }
            }
        }
    }
}

#[component]
fn ActionCard(title: &'static str, body: &'static str, to: Routes) -> Element {
    rsx! {
        div { class: "card bg-base-100 shadow-xl",
            div { class: "card-body",
                h2 { class: "card-title", "{title}" }
                p { "{body}" }
                div { class: "card-actions justify-end",
                    Link { to, class: "btn btn-primary btn-sm", "Open" }
                }
            }
        }
    }
}
