use dioxus::prelude::*;
use tm_types::auth::{Identity, Role};

use crate::{
    Routes, app::auth::hooks::{use_auth, use_session}, components::use_toast
};

#[derive(Clone, Debug, PartialEq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub route: Routes,
}

impl MenuEntry {
    fn new(label: &'static str, route: Routes) -> Self {
        Self { label, route }
    }
}

/// Menu entries for the current user. Depends on nothing but the identity.
pub fn menu_entries(user: Option<&Identity>) -> Vec<MenuEntry> {
    let Some(user) = user else {
        return vec![
            MenuEntry::new("Login", Routes::login_then(String::new())),
            MenuEntry::new("Register", Routes::RegisterPage {}),
        ];
    };

    match user.role {
        Role::Admin => vec![
            MenuEntry::new("Destinations", Routes::ViewDestinationsPage {}),
            MenuEntry::new("Add Destination", Routes::AddDestinationPage {}),
            MenuEntry::new("Hotels", Routes::ViewHotelsPage {}),
            MenuEntry::new("Add Hotel", Routes::AddHotelPage {}),
            MenuEntry::new("Restaurants", Routes::ViewRestaurantsPage {}),
            MenuEntry::new("Add Restaurant", Routes::AddRestaurantPage {}),
            MenuEntry::new("Complaints", Routes::ManageComplaintsPage {}),
        ],
        Role::TravelAgency => vec![
            MenuEntry::new("Create Package", Routes::CreatePackagePage {}),
            MenuEntry::new("My Packages", Routes::ViewPackagesPage {}),
        ],
        Role::Traveller => vec![
            MenuEntry::new("Browse Packages", Routes::TravelPackagesPage {}),
            MenuEntry::new("My Bookings", Routes::MyBookingsPage {}),
            MenuEntry::new("My Complaints", Routes::MyComplaintsPage {}),
        ],
    }
}

#[component]
pub fn NavBar() -> Element {
    let auth = use_auth();
    let session = use_session();
    let toast = use_toast();
    let nav = navigator();
    let mut menu_open = use_signal(|| false);

    let user = auth.read().user.clone();
    let entries = menu_entries(user.as_ref());

    let on_logout = use_callback(move |_: ()| {
        session.logout();
        toast.info("Signed out");
        menu_open.set(false);
        nav.push(Routes::HomePage {});
    });

    rsx! {
        div { class: "navbar bg-base-200 shadow-sm",
            div { class: "flex-1",
                Link { class: "btn btn-ghost text-xl", to: Routes::HomePage {}, "Travel Management" }
                ul { class: "menu menu-horizontal px-1 hidden lg:flex",
                    for entry in entries.iter().cloned() {
                        li { key: "{entry.label}", Link { to: entry.route, "{entry.label}" } }
                    }
                }
            }

            div { class: "flex-none gap-2",
                if let Some(user) = user.as_ref() {
                    div { class: "badge badge-primary gap-1 mr-2", title: "{user.role.label()}",
                        "{user.display_name()}"
                    }
                    button { class: "btn btn-sm btn-outline hidden lg:inline-flex", onclick: move |_| on_logout.call(()), "Logout" }
                }
                button {
                    class: "btn btn-square btn-ghost lg:hidden",
                    onclick: move |_| menu_open.set(!menu_open()),
                    svg { class: "w-5 h-5", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", stroke_width: "2",
                        path { d: "M4 6h16M4 12h16M4 18h16" }
                    }
                }
            }
        }
        if menu_open() {
            ul { class: "menu bg-base-200 w-full lg:hidden",
                for entry in entries.iter().cloned() {
                    li { key: "{entry.label}",
                        Link { to: entry.route, onclick: move |_| menu_open.set(false), "{entry.label}" }
                    }
                }
                if user.is_some() {
                    li { a { onclick: move |_| on_logout.call(()), "Logout" } }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(user: Option<&Identity>) -> Vec<&'static str> {
        menu_entries(user).into_iter().map(|e| e.label).collect()
    }

    #[test]
    fn test_anonymous_menu() {
        assert_eq!(labels(None), vec!["Login", "Register"]);
    }

    #[test]
    fn test_admin_menu() {
        let admin = Identity::new("root", Role::Admin);
        let menu = labels(Some(&admin));
        assert_eq!(menu.len(), 7);
        assert!(menu.contains(&"Complaints"));
        assert!(!menu.contains(&"My Bookings"));
    }

    #[test]
    fn test_agency_menu() {
        let agency = Identity::new("globe", Role::TravelAgency);
        assert_eq!(labels(Some(&agency)), vec!["Create Package", "My Packages"]);
    }

    #[test]
    fn test_traveller_menu_routes() {
        let traveller = Identity::new("ana", Role::Traveller);
        let menu = menu_entries(Some(&traveller));
        assert_eq!(menu[1].route, Routes::MyBookingsPage {});
        assert!(menu.iter().all(|e| e.label != "Login"));
    }
}
