//! Booking confirmation and manage-trip views.

use crate::error::AirlineError;
use crate::types::booking::Booking;
use crate::web::format::{display_date, display_date_time};
use crate::web::layout::{escape, page};

/// A booking reference together with what the reservation service said.
pub type BookingLookup = (String, Result<Booking, AirlineError>);

/// A booking that resolved, with the reference it was fetched under.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingCard {
    pub booking_id: String,
    pub booking: Booking,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmationView {
    /// No outbound booking to show yet.
    Loading,
    /// At least one requested lookup failed.
    Error,
    Loaded {
        outbound: BookingCard,
        returning: Option<BookingCard>,
    },
}

impl ConfirmationView {
    /// Any failed lookup wins over everything else; without an outbound
    /// booking the page stays in its loading state.
    pub fn resolve(outbound: Option<BookingLookup>, returning: Option<BookingLookup>) -> Self {
        let outbound = match outbound.map(split_lookup).transpose() {
            Ok(card) => card,
            Err(()) => return Self::Error,
        };
        let returning = match returning.map(split_lookup).transpose() {
            Ok(card) => card,
            Err(()) => return Self::Error,
        };
        match outbound {
            Some(outbound) => Self::Loaded {
                outbound,
                returning,
            },
            None => Self::Loading,
        }
    }
}

fn split_lookup((booking_id, result): BookingLookup) -> Result<BookingCard, ()> {
    result
        .map(|booking| BookingCard {
            booking_id,
            booking,
        })
        .map_err(|_| ())
}

pub fn render_card(heading: &str, card: &BookingCard) -> String {
    let details = &card.booking.flight_details;
    let passengers = card
        .booking
        .passengers
        .iter()
        .map(|p| {
            format!(
                "<li>{} {} (DOB: {}) ({}<span>x Baggage</span>)</li>",
                escape(&p.first_name),
                escape(&p.last_name),
                escape(&display_date(&p.dob)),
                p.total_baggage,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<article class="booking">
<h3>{heading}</h3>
<p>Booking ID: {booking_id}</p>
<div><strong>Flight:</strong> {flight_number} from {origin} to {destination}</div>
<div><strong>Departure Time:</strong> {departure}</div>
<div><strong>Passenger Details:</strong></div>
<ul>
{passengers}
</ul>
</article>"#,
        heading = escape(heading),
        booking_id = escape(&card.booking_id),
        flight_number = escape(&details.flight_number),
        origin = escape(&details.origin),
        destination = escape(&details.destination),
        departure = escape(&display_date_time(&details.departure_time)),
    )
}

const HOME_LINK: &str = r#"<a class="button" href="/">Go Back Home</a>"#;

pub fn render_confirmation(view: &ConfirmationView) -> String {
    match view {
        ConfirmationView::Loading => page("Booking Confirmation", "<div>Loading...</div>"),
        ConfirmationView::Error => page(
            "Booking Confirmation",
            "<div>Error loading booking details.</div>",
        ),
        ConfirmationView::Loaded {
            outbound,
            returning,
        } => {
            let returning = returning
                .as_ref()
                .map(|card| render_card("Returning Flight", card))
                .unwrap_or_default();
            let body = format!(
                r#"<h1>Booking Confirmation</h1>
<p>Thank you for booking with us! Here are your booking details:</p>
{outbound}
{returning}
{HOME_LINK}"#,
                outbound = render_card("Departure Flight", outbound),
            );
            page("Booking Confirmation", &body)
        }
    }
}

pub fn render_manage_trip(card: Option<&BookingCard>) -> String {
    let body = match card {
        Some(card) => format!(
            "<h1>Manage Trip</h1>\n{}\n{HOME_LINK}",
            render_card("Your Flight", card)
        ),
        None => format!(
            "<h1>Manage Trip</h1>\n<p>Enter a booking reference on the home page to find your trip.</p>\n{HOME_LINK}"
        ),
    };
    page("Manage Trip", &body)
}

pub fn render_manage_trip_error() -> String {
    page("Manage Trip", "<div>Error loading booking details.</div>")
}
