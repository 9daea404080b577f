//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use rolodex_domain::error::{ParsePersonIdError, RolodexError};

/// Maps [`RolodexError`] to an HTTP response with appropriate status code.
///
/// Bodies are human-readable plain text. Storage failures are logged here
/// and never leaked to the client.
#[derive(Debug)]
pub struct ApiError(RolodexError);

impl From<RolodexError> for ApiError {
    fn from(err: RolodexError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            // A non-numeric path segment behaves like a route that never
            // matched: a bare 404 with an empty body.
            RolodexError::InvalidId(ParsePersonIdError::NonNumeric) => {
                return StatusCode::NOT_FOUND.into_response();
            }
            RolodexError::InvalidId(ParsePersonIdError::OutOfRange) => {
                (StatusCode::CONFLICT, "Invalid ID".to_string())
            }
            RolodexError::NotFound(_) => {
                (StatusCode::NOT_FOUND, "Person not found.".to_string())
            }
            RolodexError::AlreadyExists(id) => (
                StatusCode::CONFLICT,
                format!("Person with ID {id} already exists."),
            ),
            RolodexError::InvalidPayload(err) => {
                tracing::debug!(error = %err, "rejecting malformed person payload");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Invalid person payload.".to_string(),
                )
            }
            RolodexError::Csv(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("CSV error: {detail}"),
            ),
            RolodexError::Empty => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "No people in the address book.".to_string(),
            ),
            RolodexError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage error.".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
