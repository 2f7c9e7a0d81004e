//! bookshelf-rs: A minimal library inventory REST service.
//!
//! This crate provides a small HTTP/JSON API over a single in-memory
//! collection of book records, modeling a tiny lending library:
//! listing, creation, lookup, checkout and return, plus multipart
//! file uploads.
//!
//! # Features
//!
//! - Book listing and lookup by id
//! - Checkout/return tracking of available copies
//! - Single and multiple multipart file upload
//! - Static service info record at the root path
//! - TOML configuration with CLI overrides

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Configuration and CLI.
pub mod config;
/// Error types.
pub mod error;
/// Library and book models.
pub mod library;
/// HTTP server.
pub mod server;


pub use config::{Cli, Command, Config};
pub use error::{AppError, Result};
pub use server::AppState;
