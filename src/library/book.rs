//! Book inventory model.

use serde::{Deserialize, Serialize};

/// Represents one title's catalog entry and available copy count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier for the book.
    pub id: String,

    /// Book title.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Number of copies currently available for checkout.
    pub quantity: i64,
}

impl Book {
    /// Create a new book record.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }
}

/// Static service metadata returned at the root path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoRecord {
    /// Service version.
    pub version: String,

    /// Library title.
    pub title: String,

    /// Library author/maintainer.
    pub author: String,

    /// Service description.
    pub description: String,
}

/// Initial inventory the service starts with.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new("1", "The Pragmatic Programmer", "Andrew Hunt", 20),
        Book::new("2", "Clean Code", "Robert C. Martin", 10),
        Book::new("3", "The Mythical Man-Month", "Frederick Brooks", 12),
        Book::new(
            "4",
            "Structure and Interpretation of Computer Programs",
            "Harold Abelson",
            2,
        ),
        Book::new("5", "Design Patterns", "Erich Gamma", 0),
    ]
}
