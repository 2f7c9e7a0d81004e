//! HTTP server and routes.

mod handlers;
mod state;

pub use state::AppState;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let max_body = state.config.upload.max_body_bytes;

    let book_routes = Router::new()
        .route("/", get(handlers::list_books).post(handlers::create_book))
        .route("/{id}", get(handlers::find_book))
        .route("/checkout", patch(handlers::checkout_book))
        .route("/return", patch(handlers::return_book));

    Router::new()
        .route("/", get(handlers::home))
        .nest("/books", book_routes)
        .route("/upload", post(handlers::upload_file))
        .route("/multi", post(handlers::upload_multi))
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
