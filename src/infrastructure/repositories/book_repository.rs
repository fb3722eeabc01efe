//! SeaORM implementation of BookRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, LoaderTrait};

use crate::domain::{self, BookRepository, BookWithRelations, DomainError};
use crate::models::{author, author_books, book, publisher};

/// SeaORM-based implementation of BookRepository
pub struct SeaOrmBookRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn list_with_relations(&self) -> Result<Vec<BookWithRelations>, DomainError> {
        let books = book::Entity::find().all(&self.db).await?;

        // One query per relation rather than one per book.
        let publishers = books.load_one(publisher::Entity, &self.db).await?;
        let author_sets = books
            .load_many_to_many(author::Entity, author_books::Entity, &self.db)
            .await?;

        let mut out = Vec::with_capacity(books.len());
        for ((book, publisher), authors) in books.into_iter().zip(publishers).zip(author_sets) {
            let publisher = publisher.ok_or_else(|| {
                DomainError::Integrity(format!(
                    "book {} references publisher {} which does not exist",
                    book.id, book.publisher_id
                ))
            })?;

            out.push(BookWithRelations {
                book: domain::Book {
                    id: book.id,
                    title: book.title,
                },
                publisher: domain::Publisher {
                    id: publisher.id,
                    name: publisher.name,
                },
                authors: authors
                    .into_iter()
                    .map(|a| domain::Author {
                        id: a.id,
                        name: a.name,
                    })
                    .collect(),
            });
        }

        Ok(out)
    }
}
