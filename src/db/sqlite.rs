use std::str::FromStr;

use crate::db::models::{DestinationEntry, FlightRow, OriginEntry};
use crate::db::schema::SQLITE_INIT;
use crate::error::AirlineError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

/// `Flight` joined to its `Aircraft`, filtered on route and calendar date.
/// `DATE(Departure)` drops the time of day; stored timestamps are UTC.
const FLIGHT_SEARCH_SQL: &str = r#"
    SELECT
        Flight.Flight_ID AS Flight_ID,
        Flight.Flight_Number AS Flight_Number,
        Flight.Origin AS Origin,
        Flight.Destination AS Destination,
        Flight.Departure AS Departure,
        Flight.Arrival AS Arrival,
        Flight.Aircraft_ID AS Aircraft_ID,
        Aircraft.Model AS Model,
        Aircraft.Manufacturer AS Manufacturer,
        Aircraft.Capacity AS Capacity
    FROM Flight
    INNER JOIN Aircraft ON Flight.Aircraft_ID = Aircraft.Aircraft_ID
    WHERE Origin = ?
      AND Destination = ?
      AND DATE(Departure) = ?
"#;

/// Open (and create if missing) the SQLite database behind `database_url`.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AirlineError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    Ok(pool)
}

#[derive(Clone)]
pub struct FlightStorage {
    pool: SqlitePool,
}

impl FlightStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), AirlineError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Flights flying `origin` → `destination` whose departure falls on `date`
    /// (`YYYY-MM-DD`). Values are bound as given; a missing value binds `NULL`
    /// and matches nothing.
    pub async fn search_flights(
        &self,
        origin: Option<&str>,
        destination: Option<&str>,
        date: Option<&str>,
    ) -> Result<Vec<FlightRow>, AirlineError> {
        let rows = sqlx::query_as::<_, FlightRow>(FLIGHT_SEARCH_SQL)
            .bind(origin)
            .bind(destination)
            .bind(date)
            .fetch_all(&self.pool)
            .await?;
        debug!(?origin, ?destination, ?date, count = rows.len(), "flight search");
        Ok(rows)
    }

    pub async fn list_origins(&self) -> Result<Vec<OriginEntry>, AirlineError> {
        let rows = sqlx::query_as::<_, OriginEntry>(
            "SELECT DISTINCT Origin FROM Flight ORDER BY Origin",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn list_destinations(&self) -> Result<Vec<DestinationEntry>, AirlineError> {
        let rows = sqlx::query_as::<_, DestinationEntry>(
            "SELECT DISTINCT Destination FROM Flight ORDER BY Destination",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
