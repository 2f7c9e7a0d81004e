//! Library models.

pub mod book;

pub use book::{Book, InfoRecord};
