//! SQL DDL for the two tables this site reads.
//! The production schema is owned elsewhere; this copy lets a fresh SQLite
//! file be initialised for development and tests.

/// SQLite schema with:
/// - `Aircraft` keyed by `Aircraft_ID`
/// - `Flight` referencing `Aircraft` via `Aircraft_ID`
/// - `Departure`/`Arrival` stored as naive UTC text (`YYYY-MM-DD HH:MM:SS`)
/// - an index on the search columns
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS Aircraft (
    Aircraft_ID INTEGER PRIMARY KEY,
    Model TEXT NOT NULL,
    Manufacturer TEXT NOT NULL,
    Capacity INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS Flight (
    Flight_ID INTEGER PRIMARY KEY AUTOINCREMENT,
    Flight_Number TEXT NOT NULL,
    Origin TEXT NOT NULL,
    Destination TEXT NOT NULL,
    Departure TEXT NOT NULL,
    Arrival TEXT NULL,
    Aircraft_ID INTEGER NOT NULL REFERENCES Aircraft(Aircraft_ID)
);

CREATE INDEX IF NOT EXISTS idx_flight_route ON Flight(Origin, Destination);
"#;
