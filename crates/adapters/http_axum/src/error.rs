//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use garage_domain::error::{CommandError, GarageError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`GarageError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(GarageError);

impl From<CommandError> for ApiError {
    fn from(err: CommandError) -> Self {
        Self(GarageError::Command(err))
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(GarageError::Validation(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            GarageError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            GarageError::Command(err) => {
                let cause = err.0.to_string();
                (StatusCode::BAD_GATEWAY, format!("{err}: {cause}"))
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
