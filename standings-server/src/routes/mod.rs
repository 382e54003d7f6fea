pub mod events;

use axum::{
    Json,
    extract::{FromRequest, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use standings_core::StoreError;
use tracing::error;

/// JSON body extractor whose rejections come back as `{error}`
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// JSON body extractor whose rejections come back as `{success: false, message}`
#[derive(FromRequest)]
#[from_request(via(Json), rejection(MutationError))]
pub struct MutationJson<T>(pub T);

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error response for create/update, shaped like their success responses
#[derive(Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
}

/// Map an error to a status code, looking through to the store error if there is one.
fn status_for(err: &anyhow::Error) -> StatusCode {
    if err.is::<JsonRejection>() {
        return StatusCode::BAD_REQUEST;
    }

    match err.downcast_ref::<StoreError>() {
        Some(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
        Some(StoreError::AlreadyExists(_)) | Some(StoreError::FilenameConflict(_)) => {
            StatusCode::CONFLICT
        }
        Some(StoreError::InvalidEvent(_)) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Convert errors to `{error}` responses
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        let error = match status {
            StatusCode::NOT_FOUND => "Event not found".to_string(),
            StatusCode::INTERNAL_SERVER_ERROR => {
                error!(error = %self.0, "request failed");
                self.0.to_string()
            }
            _ => self.0.to_string(),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Convert errors to `{success: false, message}` responses.
///
/// Internal failures get a generic message; the cause only goes to the log.
pub struct MutationError(anyhow::Error);

impl IntoResponse for MutationError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        let message = match status {
            StatusCode::NOT_FOUND => "Event not found".to_string(),
            StatusCode::INTERNAL_SERVER_ERROR => {
                error!(error = %self.0, "request failed");
                "Internal server error".to_string()
            }
            _ => self.0.to_string(),
        };

        let body = Json(FailureResponse {
            success: false,
            message,
        });
        (status, body).into_response()
    }
}

impl<E> From<E> for MutationError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
