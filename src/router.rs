use std::sync::Arc;

use axum::{Router, routing::get};

use crate::api::ReservationSource;
use crate::handlers::{flight, home, reservation};
use crate::service::flight_search::FlightSearchService;

/// Shared handles cloned into every request.
#[derive(Clone)]
pub struct AirlineState {
    pub flights: FlightSearchService,
    pub reservations: Arc<dyn ReservationSource>,
}

impl AirlineState {
    pub fn new(flights: FlightSearchService, reservations: Arc<dyn ReservationSource>) -> Self {
        Self {
            flights,
            reservations,
        }
    }
}

pub fn airline_router(state: AirlineState) -> Router {
    Router::new()
        .route("/", get(home::home_page))
        .route("/manage-trip", get(home::manage_trip_redirect))
        .route("/flights", get(flight::flight_results_page))
        .route("/flights/confirmation", get(reservation::confirmation_page))
        .route("/reservation/manage-trip", get(reservation::manage_trip_page))
        .route("/api/flight/search", get(flight::flight_search_handler))
        .route("/api/flight/locations", get(flight::flight_locations_handler))
        .with_state(state)
}
