use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of `Flight INNER JOIN Aircraft`.
///
/// Field names serialize as the database column names so the JSON matches
/// what a `SELECT *` over the join returns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct FlightRow {
    #[serde(rename = "Flight_ID")]
    #[sqlx(rename = "Flight_ID")]
    pub flight_id: i64,
    #[serde(rename = "Flight_Number")]
    #[sqlx(rename = "Flight_Number")]
    pub flight_number: String,
    #[serde(rename = "Origin")]
    #[sqlx(rename = "Origin")]
    pub origin: String,
    #[serde(rename = "Destination")]
    #[sqlx(rename = "Destination")]
    pub destination: String,
    #[serde(rename = "Departure")]
    #[sqlx(rename = "Departure")]
    pub departure: NaiveDateTime,
    #[serde(rename = "Arrival")]
    #[sqlx(rename = "Arrival")]
    pub arrival: Option<NaiveDateTime>,
    #[serde(rename = "Aircraft_ID")]
    #[sqlx(rename = "Aircraft_ID")]
    pub aircraft_id: i64,
    #[serde(rename = "Model")]
    #[sqlx(rename = "Model")]
    pub model: String,
    #[serde(rename = "Manufacturer")]
    #[sqlx(rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(rename = "Capacity")]
    #[sqlx(rename = "Capacity")]
    pub capacity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct OriginEntry {
    #[serde(rename = "Origin")]
    #[sqlx(rename = "Origin")]
    pub origin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct DestinationEntry {
    #[serde(rename = "Destination")]
    #[sqlx(rename = "Destination")]
    pub destination: String,
}
