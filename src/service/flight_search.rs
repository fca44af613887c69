use tracing::info;

use crate::db::FlightStorage;
use crate::error::AirlineError;
use crate::types::search::{FlightSearchQuery, FlightSearchResponse, LocationsResponse};

/// Flight lookups shared by the JSON API and the server-rendered pages.
#[derive(Clone)]
pub struct FlightSearchService {
    storage: FlightStorage,
}

impl FlightSearchService {
    pub fn new(storage: FlightStorage) -> Self {
        Self { storage }
    }

    /// Outbound flights for the query and, when a return date is present,
    /// flights on the reversed route for that date.
    ///
    /// The return query is only issued once the outbound one has completed.
    pub async fn search(
        &self,
        query: &FlightSearchQuery,
    ) -> Result<FlightSearchResponse, AirlineError> {
        let outbound_flights = self
            .storage
            .search_flights(
                query.origin.as_deref(),
                query.destination.as_deref(),
                query.departure.as_deref(),
            )
            .await?;

        let return_flights = match query.requested_return() {
            Some(return_date) => Some(
                self.storage
                    .search_flights(
                        query.destination.as_deref(),
                        query.origin.as_deref(),
                        Some(return_date),
                    )
                    .await?,
            ),
            None => None,
        };

        info!(
            origin = query.origin.as_deref().unwrap_or("<none>"),
            destination = query.destination.as_deref().unwrap_or("<none>"),
            outbound = outbound_flights.len(),
            returning = ?return_flights.as_ref().map(Vec::len),
            "flight search served"
        );

        Ok(FlightSearchResponse {
            outbound_flights,
            return_flights,
        })
    }

    pub async fn locations(&self) -> Result<LocationsResponse, AirlineError> {
        let origins = self.storage.list_origins().await?;
        let destinations = self.storage.list_destinations().await?;
        Ok(LocationsResponse {
            origins,
            destinations,
        })
    }
}
