//! SeaORM implementation of PublisherRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, LoaderTrait};

use crate::domain::{self, DomainError, PublisherRepository, PublisherWithBooks};
use crate::models::{book, publisher};

/// SeaORM-based implementation of PublisherRepository
pub struct SeaOrmPublisherRepository {
    db: DatabaseConnection,
}

impl SeaOrmPublisherRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PublisherRepository for SeaOrmPublisherRepository {
    async fn list_with_books(&self) -> Result<Vec<PublisherWithBooks>, DomainError> {
        let publishers = publisher::Entity::find().all(&self.db).await?;

        // The catalogue follows the publisher_id column on books, not the
        // author association table.
        let book_sets = publishers.load_many(book::Entity, &self.db).await?;

        Ok(publishers
            .into_iter()
            .zip(book_sets)
            .map(|(publisher, books)| PublisherWithBooks {
                publisher: domain::Publisher {
                    id: publisher.id,
                    name: publisher.name,
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
