use std::str::FromStr;

use dioxus::prelude::*;

use crate::pages::{
    AccessDeniedPage, AddDestinationPage, AddHotelPage, AddRestaurantPage, BookDestinationPage, BookPackagePage, CreatePackagePage, DestinationDetailsPage, EditPackagePage, HomePage, LoginPage, ManageComplaintsPage, MyBookingsPage, MyComplaintsPage, NotFoundPage, PackageDetailsPage, RegisterPage, SearchResultsPage, TravelPackagesPage, ViewDestinationsPage, ViewHotelsPage, ViewPackagesPage, ViewRestaurantsPage
};

#[component]
pub fn AppRouter() -> Element {
    rsx! {
        Router::<Routes> {}
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Routes {
    // Public
    #[route("/")]
    HomePage {},
    #[route("/login?:redirect")]
    LoginPage { redirect: String },
    #[route("/register")]
    RegisterPage {},
    #[route("/search-results?:query")]
    SearchResultsPage { query: String },
    #[route("/view-travel-packages")]
    TravelPackagesPage {},
    #[route("/access-denied")]
    AccessDeniedPage {},

    // Administrator
    #[route("/add-destination")]
    AddDestinationPage {},
    #[route("/view-destinations")]
    ViewDestinationsPage {},
    #[route("/add-hotel")]
    AddHotelPage {},
    #[route("/view-hotels")]
    ViewHotelsPage {},
    #[route("/add-restaurant")]
    AddRestaurantPage {},
    #[route("/view-restaurants")]
    ViewRestaurantsPage {},
    #[route("/manage-complaints")]
    ManageComplaintsPage {},

    // Travel agency
    #[route("/create-package")]
    CreatePackagePage {},
    #[route("/view-packages")]
    ViewPackagesPage {},
    #[route("/edit-package/:id")]
    EditPackagePage { id: i64 },

    // Traveller
    #[route("/destination-details/:id")]
    DestinationDetailsPage { id: i64 },
    #[route("/book-destination/:id")]
    BookDestinationPage { id: i64 },
    #[route("/package-details/:id")]
    PackageDetailsPage { id: i64 },
    #[route("/book-package/:id")]
    BookPackagePage { id: i64 },
    #[route("/my-bookings")]
    MyBookingsPage {},
    #[route("/my-complaints")]
    MyComplaintsPage {},

    #[route("/:..route")]
    NotFoundPage { route: Vec<String> },
}

impl Routes {
    /// Login page that returns to `path` afterwards.
    pub fn login_then(path: impl Into<String>) -> Self {
        Routes::LoginPage { redirect: path.into() }
    }

    /// Route for an already sanitized in-app path, home if it matches nothing.
    pub fn for_path(path: &str) -> Self {
        match Routes::from_str(path) {
            Ok(Routes::NotFoundPage { .. }) | Err(_) => Routes::HomePage {},
            Ok(route) => route,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_parse_from_paths() {
        assert_eq!(Routes::from_str("/book-package/42").ok(), Some(Routes::BookPackagePage { id: 42 }));
        assert_eq!(Routes::from_str("/my-bookings").ok(), Some(Routes::MyBookingsPage {}));
        assert_eq!(
            Routes::from_str("/login?redirect=/my-bookings").ok(),
            Some(Routes::login_then("/my-bookings"))
        );
    }

    #[test]
    fn test_routes_render_paths() {
        assert_eq!(Routes::EditPackagePage { id: 3 }.to_string(), "/edit-package/3");
        assert_eq!(Routes::AccessDeniedPage {}.to_string(), "/access-denied");
    }

    #[test]
    fn test_unknown_paths_fall_through() {
        assert!(matches!(Routes::from_str("/no/such/page"), Ok(Routes::NotFoundPage { .. })));
    }

    #[test]
    fn test_for_path() {
        assert_eq!(Routes::for_path("/my-bookings"), Routes::MyBookingsPage {});
        assert_eq!(Routes::for_path("/package-details/7"), Routes::PackageDetailsPage { id: 7 });
        assert_eq!(Routes::for_path("/no/such/page"), Routes::HomePage {});
    }
}
