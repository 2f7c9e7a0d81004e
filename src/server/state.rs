//! Application state shared across handlers.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::library::book::{Book, InfoRecord, seed_books};
use std::sync::Arc;

/// Shared application state.
///
/// The inventory is one in-memory list behind a single lock; every
/// mutating operation runs its check-and-update entirely inside the
/// write lock so concurrent requests never observe a half-applied
/// change. No references into the list escape the lock.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,
    /// In-memory book inventory, in insertion order.
    books: Arc<parking_lot::RwLock<Vec<Book>>>,
}

impl AppState {
    /// Create new application state seeded with the initial inventory.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            books: Arc::new(parking_lot::RwLock::new(seed_books())),
        }
    }

    /// Create state with an explicit starting inventory.
    pub fn with_books(config: Config, books: Vec<Book>) -> Self {
        Self {
            config: Arc::new(config),
            books: Arc::new(parking_lot::RwLock::new(books)),
        }
    }

    /// Service info record built from config and crate version.
    pub fn info(&self) -> InfoRecord {
        InfoRecord {
            version: env!("CARGO_PKG_VERSION").to_string(),
            title: self.config.server.title.clone(),
            author: self.config.server.author.clone(),
            description: self.config.server.description.clone(),
        }
    }

    /// Get all books, in insertion order.
    pub fn list_books(&self) -> Vec<Book> {
        self.books.read().clone()
    }

    /// Get book by id.
    pub fn get_book(&self, id: &str) -> Option<Book> {
        self.books.read().iter().find(|b| b.id == id).cloned()
    }

    /// Get book count.
    pub fn book_count(&self) -> usize {
        self.books.read().len()
    }

    /// Append a new book to the inventory.
    ///
    /// Rejects duplicate ids and negative quantities; the record is
    /// otherwise stored unmodified.
    pub fn add_book(&self, book: Book) -> Result<Book> {
        if book.quantity < 0 {
            return Err(AppError::BadRequest(
                "quantity must not be negative".to_string(),
            ));
        }

        let mut books = self.books.write();
        if books.iter().any(|b| b.id == book.id) {
            return Err(AppError::BadRequest("book id already exists".to_string()));
        }

        books.push(book.clone());
        Ok(book)
    }

    /// Check out one copy of a book, decrementing its quantity.
    ///
    /// Fails without mutating when the book is unknown or has no
    /// copies left.
    pub fn checkout_book(&self, id: &str) -> Result<Book> {
        let mut books = self.books.write();
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(AppError::BookNotFound)?;

        if book.quantity <= 0 {
            return Err(AppError::NotAvailable);
        }

        book.quantity -= 1;
        Ok(book.clone())
    }

    /// Return one copy of a book, incrementing its quantity.
    ///
    /// No upper bound is enforced.
    pub fn return_book(&self, id: &str) -> Result<Book> {
        let mut books = self.books.write();
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(AppError::BookNotFound)?;

        book.quantity += 1;
        Ok(book.clone())
    }
}
