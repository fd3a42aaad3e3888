//! Unified error handling for the server.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::handlers::StatusMessage;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog_engine::Error),

    #[error("Invalid request body: {0}")]
    JsonBody(#[from] JsonRejection),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Map a catalog error to the HTTP status reported for it.
pub fn status_for(error: &catalog_engine::Error) -> StatusCode {
    use catalog_engine::Error;

    match error {
        Error::Conflict(_) => StatusCode::CONFLICT,
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::InvalidSnapshot(_) | Error::StoreUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Catalog(e) => {
                let status = status_for(e);
                if status.is_server_error() {
                    tracing::error!("Catalog error: {:?}", e);
                }
                (status, e.to_string())
            }
            AppError::JsonBody(rejection) => {
                tracing::warn!(
                    status = %rejection.status(),
                    "Rejected request body: {}",
                    rejection.body_text()
                );
                (StatusCode::BAD_REQUEST, rejection.body_text())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Io(e) => {
                tracing::error!("Snapshot I/O error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(StatusMessage::failure(message))).into_response()
    }
}

/// Result type alias for handlers.
pub type Result<T> = std::result::Result<T, AppError>;
