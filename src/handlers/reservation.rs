use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::warn;

use crate::api::ReservationSource;
use crate::middleware::QueryParams;
use crate::router::AirlineState;
use crate::web::booking::{
    BookingCard, BookingLookup, ConfirmationView, render_confirmation, render_manage_trip,
    render_manage_trip_error,
};

/// Look up `booking_id` if there is one. Empty references are not looked up.
async fn lookup(
    reservations: &dyn ReservationSource,
    booking_id: Option<String>,
) -> Option<BookingLookup> {
    let booking_id = booking_id.filter(|id| !id.is_empty())?;
    let result = reservations.fetch_booking(&booking_id).await;
    if let Err(e) = &result {
        warn!(booking_id = %booking_id, error = %e, "booking lookup failed");
    }
    Some((booking_id, result))
}

/// GET /flights/confirmation?outboundBookingReference=..[&returningBookingReference=..]
pub async fn confirmation_page(
    State(state): State<AirlineState>,
    params: QueryParams,
) -> Response {
    let reservations = state.reservations.as_ref();
    let (outbound, returning) = futures::join!(
        lookup(reservations, params.get_owned("outboundBookingReference")),
        lookup(reservations, params.get_owned("returningBookingReference"))
    );

    let view = ConfirmationView::resolve(outbound, returning);
    let status = if view == ConfirmationView::Error {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    (status, Html(render_confirmation(&view))).into_response()
}

/// GET /reservation/manage-trip?bookingReference=..
pub async fn manage_trip_page(
    State(state): State<AirlineState>,
    params: QueryParams,
) -> Response {
    let found = lookup(
        state.reservations.as_ref(),
        params.get_owned("bookingReference"),
    )
    .await;

    match found {
        None => Html(render_manage_trip(None)).into_response(),
        Some((booking_id, Ok(booking))) => {
            let card = BookingCard {
                booking_id,
                booking,
            };
            Html(render_manage_trip(Some(&card))).into_response()
        }
        Some((_, Err(_))) => {
            (StatusCode::BAD_GATEWAY, Html(render_manage_trip_error())).into_response()
        }
    }
}
