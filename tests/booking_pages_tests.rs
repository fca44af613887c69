use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use snoopy_airlines::{
    AirlineError, FlightSearchService,
    api::ReservationSource,
    db::{self, FlightStorage},
    router::{AirlineState, airline_router},
    types::booking::{Booking, BookingPassenger, FlightDetails},
};
use tower::ServiceExt;

/// Serves bookings from memory and counts lookups.
#[derive(Default)]
struct StubReservations {
    bookings: HashMap<String, Booking>,
    failing: Vec<String>,
    lookups: AtomicUsize,
}

#[async_trait]
impl ReservationSource for StubReservations {
    async fn fetch_booking(&self, booking_id: &str) -> Result<Booking, AirlineError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.failing.iter().any(|id| id == booking_id) {
            return Err(AirlineError::ReservationStatus(
                StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }
        self.bookings
            .get(booking_id)
            .cloned()
            .ok_or(AirlineError::ReservationStatus(StatusCode::NOT_FOUND))
    }
}

fn booking(flight_number: &str, origin: &str, destination: &str, departure: &str) -> Booking {
    Booking {
        flight_details: FlightDetails {
            flight_number: flight_number.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_time: departure.to_string(),
        },
        passengers: vec![
            BookingPassenger {
                first_name: "Charlie".to_string(),
                last_name: "Brown".to_string(),
                dob: "1990-05-01".to_string(),
                total_baggage: 1,
            },
            BookingPassenger {
                first_name: "Sally".to_string(),
                last_name: "Brown".to_string(),
                dob: "1995-11-23".to_string(),
                total_baggage: 0,
            },
        ],
    }
}

fn stub() -> StubReservations {
    let mut bookings = HashMap::new();
    bookings.insert(
        "BR000001".to_string(),
        booking("SN100", "Dallas", "Chicago", "2024-06-01T08:30:00"),
    );
    bookings.insert(
        "BR000002".to_string(),
        booking("SN101", "Chicago", "Dallas", "2024-06-08T18:00:00"),
    );
    StubReservations {
        bookings,
        failing: vec!["BR500".to_string()],
        lookups: AtomicUsize::new(0),
    }
}

async fn app_with(reservations: Arc<StubReservations>) -> Router {
    // booking pages never touch the database
    let pool = db::connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory sqlite");
    let state = AirlineState::new(
        FlightSearchService::new(FlightStorage::new(pool)),
        reservations,
    );
    airline_router(state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (
        status,
        String::from_utf8(body.to_vec()).expect("response body was not utf-8"),
    )
}

#[tokio::test]
async fn confirmation_renders_outbound_only_without_returning_reference() {
    let reservations = Arc::new(stub());
    let app = app_with(reservations.clone()).await;

    let (status, body) = get(&app, "/flights/confirmation?outboundBookingReference=BR000001").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Booking Confirmation"));
    assert!(body.contains("Departure Flight"));
    assert!(body.contains("Booking ID: BR000001"));
    assert!(body.contains("SN100 from Dallas to Chicago"));
    assert!(body.contains("6/1/2024, 8:30:00 AM"));
    assert!(body.contains("Charlie Brown (DOB: 5/1/1990) (1<span>x Baggage</span>)"));
    assert!(body.contains("Sally Brown (DOB: 11/23/1995) (0<span>x Baggage</span>)"));
    assert!(!body.contains("Returning Flight"));
    assert!(body.contains(r#"href="/">Go Back Home"#));
    assert_eq!(reservations.lookups.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn confirmation_renders_returning_card_when_it_resolves() {
    let reservations = Arc::new(stub());
    let app = app_with(reservations.clone()).await;

    let (status, body) = get(
        &app,
        "/flights/confirmation?outboundBookingReference=BR000001&returningBookingReference=BR000002",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Returning Flight"));
    assert!(body.contains("Booking ID: BR000002"));
    assert!(body.contains("SN101 from Chicago to Dallas"));
    assert_eq!(reservations.lookups.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn confirmation_errors_when_returning_lookup_fails() {
    let app = app_with(Arc::new(stub())).await;

    let (status, body) = get(
        &app,
        "/flights/confirmation?outboundBookingReference=BR000001&returningBookingReference=BR404",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("Error loading booking details."));
    assert!(!body.contains("Departure Flight"));
}

#[tokio::test]
async fn confirmation_errors_when_outbound_lookup_fails() {
    let app = app_with(Arc::new(stub())).await;

    let (status, body) = get(&app, "/flights/confirmation?outboundBookingReference=BR500").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("Error loading booking details."));
}

#[tokio::test]
async fn confirmation_without_outbound_reference_stays_loading() {
    let reservations = Arc::new(stub());
    let app = app_with(reservations.clone()).await;

    let (status, body) = get(&app, "/flights/confirmation").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Loading..."));

    let (_, body) = get(&app, "/flights/confirmation?outboundBookingReference=").await;
    assert!(body.contains("Loading..."));
    assert_eq!(reservations.lookups.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn manage_trip_page_shows_booking() {
    let app = app_with(Arc::new(stub())).await;

    let (status, body) = get(&app, "/reservation/manage-trip?bookingReference=BR000002").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Booking ID: BR000002"));
    assert!(body.contains("SN101 from Chicago to Dallas"));
}

#[tokio::test]
async fn manage_trip_page_handles_unknown_and_missing_references() {
    let app = app_with(Arc::new(stub())).await;

    let (status, body) = get(&app, "/reservation/manage-trip?bookingReference=nope").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("Error loading booking details."));

    let (status, body) = get(&app, "/reservation/manage-trip").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Enter a booking reference"));
}
