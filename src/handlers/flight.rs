use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use crate::middleware::{QueryParams, SearchParams};
use crate::router::AirlineState;
use crate::types::search::{FlightSearchQuery, FlightSearchResponse, LocationsResponse};
use crate::web::{flights, layout};
use crate::AirlineError;

/// GET /api/flight/search?origin&destination&departure[&return]
pub async fn flight_search_handler(
    State(state): State<AirlineState>,
    SearchParams(query): SearchParams,
) -> Result<Json<FlightSearchResponse>, AirlineError> {
    let results = state
        .flights
        .search(&query)
        .await
        .inspect_err(|e| error!(error = %e, "flight search failed"))?;
    Ok(Json(results))
}

/// GET /api/flight/locations
pub async fn flight_locations_handler(
    State(state): State<AirlineState>,
) -> Result<Json<LocationsResponse>, AirlineError> {
    let locations = state
        .flights
        .locations()
        .await
        .inspect_err(|e| error!(error = %e, "location listing failed"))?;
    Ok(Json(locations))
}

/// GET /flights, the page the home form redirects to.
pub async fn flight_results_page(
    State(state): State<AirlineState>,
    params: QueryParams,
) -> Response {
    let query = FlightSearchQuery::from(&params);
    match state.flights.search(&query).await {
        Ok(results) => {
            Html(flights::render(&query, params.get("passengers"), &results)).into_response()
        }
        Err(e) => {
            error!(error = %e, "flight results page failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(layout::error_page())).into_response()
        }
    }
}
