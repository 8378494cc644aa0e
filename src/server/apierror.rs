use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::holiday::holidaysource::HolidaySourceError;
use crate::time::week::weekerror::WeekError;

/// Errors returned by the HTTP handlers, rendered as `{"error": message}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid country code or no holidays found")]
    NoHolidays(#[from] HolidaySourceError),
    #[error("{}", .0.body_text())]
    InvalidQuery(#[from] QueryRejection),
    #[error("year {0} is out of the supported range")]
    YearOutOfRange(i32),
    #[error("{0}")]
    Week(#[from] WeekError)
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoHolidays(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::YearOutOfRange(_) => StatusCode::BAD_REQUEST,
            ApiError::Week(_) => StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
