use serde::{Deserialize, Serialize};

/// Booking as returned by the reservation service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub flight_details: FlightDetails,
    #[serde(default)]
    pub passengers: Vec<BookingPassenger>,
}

/// Timestamps are kept as sent; the service does not pin a format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightDetails {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingPassenger {
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub total_baggage: u32,
}
