pub mod bookings;
pub mod content;
pub mod main_dashboard;
pub mod messages;
pub mod packages;
pub mod settings;
pub mod users;
