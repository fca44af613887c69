use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Local;
use tracing::{debug, error};

use crate::middleware::QueryParams;
use crate::router::AirlineState;
use crate::web::home::{FormAction, HomeForm, manage_trip_url, render};
use crate::web::layout::error_page;

/// GET / renders the search form; with `action=search` it redirects to the
/// results page instead.
pub async fn home_page(State(state): State<AirlineState>, params: QueryParams) -> Response {
    let today = Local::now().date_naive();
    let action = FormAction::from_param(params.get("action"));
    let form = HomeForm::from_params(&params, today).apply(action);

    if action == FormAction::Search {
        let target = form.results_url();
        debug!(%target, "search submitted");
        return Redirect::to(&target).into_response();
    }

    match state.flights.locations().await {
        Ok(locations) => Html(render(&form, &locations)).into_response(),
        Err(e) => {
            error!(error = %e, "failed to load origins and destinations");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(error_page())).into_response()
        }
    }
}

/// GET /manage-trip forwards the entered reference without checking it.
pub async fn manage_trip_redirect(params: QueryParams) -> Redirect {
    let booking_reference = params.get("bookingReference").unwrap_or_default();
    Redirect::to(&manage_trip_url(booking_reference))
}
