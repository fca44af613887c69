use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use crate::error::AirlineError;
use crate::types::booking::Booking;

/// Anything that can resolve a booking reference into booking details.
#[async_trait]
pub trait ReservationSource: Send + Sync {
    async fn fetch_booking(&self, booking_id: &str) -> Result<Booking, AirlineError>;
}

/// HTTP client for the reservation service's `GET /api/reservation/{id}`.
///
/// No retry and no caching: a failed request is reported once to the caller.
#[derive(Debug, Clone)]
pub struct ReservationApi {
    client: reqwest::Client,
    base_url: Url,
}

impl ReservationApi {
    pub fn new(client: reqwest::Client, base_url: &str) -> Result<Self, AirlineError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(AirlineError::UrlParse(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        Ok(Self { client, base_url })
    }

    /// `{base}/api/reservation/{id}` with `id` encoded as a single path segment.
    pub fn booking_url(&self, booking_id: &str) -> Url {
        let mut url = self.base_url.clone();
        // base was checked in `new`, so the segments are always editable
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "reservation", booking_id]);
        }
        url
    }
}

#[async_trait]
impl ReservationSource for ReservationApi {
    async fn fetch_booking(&self, booking_id: &str) -> Result<Booking, AirlineError> {
        let url = self.booking_url(booking_id);
        debug!(%url, "fetching booking");

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            warn!(booking_id, %status, "reservation service rejected booking lookup");
            return Err(AirlineError::ReservationStatus(status));
        }
        Ok(resp.json::<Booking>().await?)
    }
}
