use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum AirlineError {
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Reservation service responded with status: {0}")]
    ReservationStatus(StatusCode),
}

impl From<figment::Error> for AirlineError {
    fn from(e: figment::Error) -> Self {
        AirlineError::Config(Box::new(e))
    }
}

impl IntoResponse for AirlineError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            AirlineError::DatabaseError(_) | AirlineError::Config(_) | AirlineError::Io(_) => {
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (status, body)
            }
            AirlineError::Reqwest(_) | AirlineError::UrlParse(_) => {
                let status = StatusCode::BAD_GATEWAY;
                let body = ApiErrorBody {
                    code: "BAD_GATEWAY".to_string(),
                    message: "Reservation service is unavailable.".to_string(),
                };
                (status, body)
            }
            AirlineError::ReservationStatus(code) => {
                let (status, err_code, msg) = match code {
                    StatusCode::NOT_FOUND => (
                        StatusCode::NOT_FOUND,
                        "NOT_FOUND",
                        "Booking reference not found.",
                    ),
                    _ => (
                        StatusCode::BAD_GATEWAY,
                        "UPSTREAM_ERROR",
                        "The reservation service returned an error.",
                    ),
                };

                (
                    status,
                    ApiErrorBody {
                        code: err_code.to_string(),
                        message: msg.to_string(),
                    },
                )
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
