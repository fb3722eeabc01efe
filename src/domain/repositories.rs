//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;

/// Book data for rendering
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
}

/// Author data for rendering
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

/// Publisher data for rendering
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Publisher {
    pub id: i32,
    pub name: String,
}

/// A book together with its publisher and contributing authors
#[derive(Debug, Clone, serde::Serialize)]
pub struct BookWithRelations {
    pub book: Book,
    pub publisher: Publisher,
    pub authors: Vec<Author>,
}

/// An author together with the books they contributed to
#[derive(Debug, Clone, serde::Serialize)]
pub struct AuthorWithBooks {
    pub author: Author,
    pub books: Vec<Book>,
}

/// A publisher together with its catalogue
#[derive(Debug, Clone, serde::Serialize)]
pub struct PublisherWithBooks {
    pub publisher: Publisher,
    pub books: Vec<Book>,
}

/// Repository trait for Book entity
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// List every book with its publisher and authors eagerly loaded
    async fn list_with_relations(&self) -> Result<Vec<BookWithRelations>, DomainError>;
}

/// Repository trait for Author entity
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// List every author with their books eagerly loaded
    async fn list_with_books(&self) -> Result<Vec<AuthorWithBooks>, DomainError>;
}

/// Repository trait for Publisher entity
#[async_trait]
pub trait PublisherRepository: Send + Sync {
    /// List every publisher with its published books eagerly loaded
    async fn list_with_books(&self) -> Result<Vec<PublisherWithBooks>, DomainError>;
}
