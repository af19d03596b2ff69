//! Administrator pages: catalogue maintenance and complaint handling.

mod complaints;
mod destination_select;
mod destinations;
mod hotels;
mod restaurants;

pub use complaints::ManageComplaintsPage;
pub use destinations::{AddDestinationPage, ViewDestinationsPage};
pub use hotels::{AddHotelPage, ViewHotelsPage};
pub use restaurants::{AddRestaurantPage, ViewRestaurantsPage};
