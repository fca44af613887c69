use serde::{Deserialize, Serialize};

use crate::db::models::{DestinationEntry, FlightRow, OriginEntry};

/// Search criteria as they arrive in the query string.
///
/// Values are kept verbatim; nothing here is validated or normalised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightSearchQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub departure: Option<String>,
    pub return_date: Option<String>,
}

impl FlightSearchQuery {
    /// The return date, if one was given and is not empty.
    pub fn requested_return(&self) -> Option<&str> {
        self.return_date.as_deref().filter(|d| !d.is_empty())
    }
}

/// Body of `GET /api/flight/search`.
///
/// `returnFlights` is omitted entirely when no return date was requested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchResponse {
    pub outbound_flights: Vec<FlightRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_flights: Option<Vec<FlightRow>>,
}

/// Body of `GET /api/flight/locations`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationsResponse {
    pub origins: Vec<OriginEntry>,
    pub destinations: Vec<DestinationEntry>,
}
