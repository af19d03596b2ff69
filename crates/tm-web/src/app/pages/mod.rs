pub mod access_denied;
pub mod admin;
pub mod agency;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
pub mod search_results;
pub mod travel_packages;
pub mod traveller;

pub use access_denied::AccessDeniedPage;
pub use admin::{
    AddDestinationPage, AddHotelPage, AddRestaurantPage, ManageComplaintsPage, ViewDestinationsPage, ViewHotelsPage, ViewRestaurantsPage
};
pub use agency::{CreatePackagePage, EditPackagePage, ViewPackagesPage};
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use search_results::SearchResultsPage;
pub use travel_packages::TravelPackagesPage;
pub use traveller::{
    BookDestinationPage, BookPackagePage, DestinationDetailsPage, MyBookingsPage, MyComplaintsPage, PackageDetailsPage
};
