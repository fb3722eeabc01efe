//! SeaORM implementation of AuthorRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, LoaderTrait};

use crate::domain::{self, AuthorRepository, AuthorWithBooks, DomainError};
use crate::models::{author, author_books, book};

/// SeaORM-based implementation of AuthorRepository
pub struct SeaOrmAuthorRepository {
    db: DatabaseConnection,
}

impl SeaOrmAuthorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorRepository for SeaOrmAuthorRepository {
    async fn list_with_books(&self) -> Result<Vec<AuthorWithBooks>, DomainError> {
        let authors = author::Entity::find().all(&self.db).await?;

        let book_sets = authors
            .load_many_to_many(book::Entity, author_books::Entity, &self.db)
            .await?;

        Ok(authors
            .into_iter()
            .zip(book_sets)
            .map(|(author, books)| AuthorWithBooks {
                author: domain::Author {
                    id: author.id,
                    name: author.name,
                },
                books: books
                    .into_iter()
                    .map(|b| domain::Book {
                        id: b.id,
                        title: b.title,
                    })
                    .collect(),
            })
            .collect())
    }
}
