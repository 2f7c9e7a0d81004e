//! HTTP request handlers.

use crate::error::{AppError, Result};
use crate::library::book::{Book, InfoRecord};
use crate::server::AppState;
use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    extract::rejection::JsonRejection,
    http::StatusCode,
};
use serde::Deserialize;
use std::path::PathBuf;

// ============================================================================
// HOME
// ============================================================================

/// Service info record, returned as a single-element array.
pub async fn home(State(state): State<AppState>) -> Json<Vec<InfoRecord>> {
    Json(vec![state.info()])
}

// ============================================================================
// BOOK API
// ============================================================================

/// List the full inventory in insertion order.
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.list_books())
}

/// Create a new book record.
///
/// A body that fails to parse as a book is an explicit 400, never a
/// silent empty response.
pub async fn create_book(
    State(state): State<AppState>,
    body: std::result::Result<Json<Book>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>)> {
    let Json(book) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let book = state.add_book(book)?;
    tracing::info!(id = %book.id, title = %book.title, "Book created");

    Ok((StatusCode::CREATED, Json(book)))
}

/// Look up a single book by id.
pub async fn find_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>> {
    let book = state.get_book(&id).ok_or(AppError::BookNotFound)?;
    Ok(Json(book))
}

/// Query parameters for checkout/return.
#[derive(Debug, Deserialize)]
pub struct BookIdParams {
    id: Option<String>,
}

impl BookIdParams {
    /// The `id` parameter, or the dedicated missing-parameter error.
    fn require_id(&self) -> Result<&str> {
        self.id.as_deref().ok_or(AppError::MissingIdParam)
    }
}

/// Check out one copy of a book.
pub async fn checkout_book(
    State(state): State<AppState>,
    Query(params): Query<BookIdParams>,
) -> Result<Json<Book>> {
    let id = params.require_id()?;
    let book = state.checkout_book(id)?;

    tracing::info!(id = %book.id, quantity = book.quantity, "Book checked out");
    Ok(Json(book))
}

/// Return one copy of a book.
pub async fn return_book(
    State(state): State<AppState>,
    Query(params): Query<BookIdParams>,
) -> Result<Json<Book>> {
    let id = params.require_id()?;
    let book = state.return_book(id)?;

    tracing::info!(id = %book.id, quantity = book.quantity, "Book returned");
    Ok(Json(book))
}

// ============================================================================
// FILE UPLOAD
// ============================================================================

/// Reduce an uploaded filename to its final path component.
fn safe_filename(name: &str) -> Result<String> {
    PathBuf::from(name)
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .ok_or_else(|| AppError::BadRequest(format!("invalid filename: {}", name)))
}

/// Save one multipart field to the given directory, returning the
/// filename written.
async fn save_field(field: axum::extract::multipart::Field<'_>, dir: &std::path::Path) -> Result<String> {
    let filename = safe_filename(field.file_name().unwrap_or_default())?;

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?;

    let path = dir.join(&filename);
    tokio::fs::write(&path, &data).await?;

    tracing::debug!(path = %path.display(), bytes = data.len(), "Saved upload");
    Ok(filename)
}

/// Single-file upload: saves the `file` field and confirms with the
/// filename. Any failure short-circuits into one error response.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<String> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(AppError::Upload("missing file field".to_string())),
            Err(e) => return Err(AppError::Upload(e.body_text())),
        };

        if field.name() != Some("file") {
            continue;
        }

        let filename = save_field(field, &state.config.upload.single_dir)
            .await
            .map_err(|e| AppError::Upload(e.to_string()))?;

        return Ok(format!("{} uploaded successfully", filename));
    }
}

/// Multi-file upload: saves every `files` field, stopping at the
/// first failure, and confirms with a count.
pub async fn upload_multi(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<String> {
    let mut count = 0usize;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(AppError::MultiUpload(e.body_text())),
        };

        if field.name() != Some("files") {
            continue;
        }

        save_field(field, &state.config.upload.multi_dir)
            .await
            .map_err(|e| AppError::MultiUpload(e.to_string()))?;

        count += 1;
    }

    Ok(format!("uploaded {} files", count))
}
