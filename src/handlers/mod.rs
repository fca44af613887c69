pub mod flight;
pub mod home;
pub mod reservation;
