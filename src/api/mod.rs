pub mod reservation_api;

pub use reservation_api::{ReservationApi, ReservationSource};
