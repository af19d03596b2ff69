//! Pages reserved for travellers.

mod book_destination;
mod book_package;
mod destination_details;
mod my_bookings;
mod my_complaints;
mod package_details;

pub use book_destination::BookDestinationPage;
pub use book_package::BookPackagePage;
pub use destination_details::DestinationDetailsPage;
pub use my_bookings::MyBookingsPage;
pub use my_complaints::MyComplaintsPage;
pub use package_details::PackageDetailsPage;
