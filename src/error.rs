use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum AppError {
    /// Book id not present in the collection.
    #[error("book not found")]
    BookNotFound,

    /// Required `id` query parameter missing.
    #[error("missing an id query parameter")]
    MissingIdParam,

    /// Checkout attempted on a book with no copies left.
    #[error("book is not available currently")]
    NotAvailable,

    /// Client sent a body or record the service rejects.
    #[error("{0}")]
    BadRequest(String),

    /// Single-file upload failure, reported as plain text.
    #[error("error uploading file: {0}")]
    Upload(String),

    /// Multi-file upload failure, reported as plain text.
    #[error("upload err: {0}")]
    MultiUpload(String),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request error");

        match &self {
            // Book API errors carry a JSON message body.
            AppError::BookNotFound => json_message(StatusCode::NOT_FOUND, &self),
            AppError::MissingIdParam | AppError::NotAvailable | AppError::BadRequest(_) => {
                json_message(StatusCode::BAD_REQUEST, &self)
            }

            // Upload errors are plain text.
            AppError::Upload(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response(),
            AppError::MultiUpload(_) => (StatusCode::BAD_REQUEST, self.to_string()).into_response(),

            AppError::Io(_) | AppError::Config(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
            }
        }
    }
}

fn json_message(status: StatusCode, err: &AppError) -> Response {
    (status, Json(json!({ "message": err.to_string() }))).into_response()
}

/// Result type alias for the application.
pub type Result<T> = std::result::Result<T, AppError>;
