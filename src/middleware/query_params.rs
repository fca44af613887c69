use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::types::search::FlightSearchQuery;

/// Raw query-string pairs, decoded but otherwise untouched.
///
/// Lookups return the first occurrence of a key. Extraction never rejects:
/// a missing or garbled query string simply yields no values.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn parse(query: Option<&str>) -> Self {
        let pairs = query
            .map(|qs| {
                url::form_urlencoded::parse(qs.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_owned(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_owned)
    }
}

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::parse(parts.uri.query()))
    }
}

/// `origin`, `destination`, `departure` and `return` lifted out of the query
/// string, passed through without validation.
#[derive(Debug, Clone, Default)]
pub struct SearchParams(pub FlightSearchQuery);

impl From<&QueryParams> for FlightSearchQuery {
    fn from(params: &QueryParams) -> Self {
        Self {
            origin: params.get_owned("origin"),
            destination: params.get_owned("destination"),
            departure: params.get_owned("departure"),
            return_date: params.get_owned("return"),
        }
    }
}

impl<S> FromRequestParts<S> for SearchParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = QueryParams::parse(parts.uri.query());
        Ok(Self(FlightSearchQuery::from(&params)))
    }
}
