use sea_orm::*;

use crate::domain::DomainError;
use crate::models::{author, author_books, book, publisher};

pub const PUBLISHER_NAME: &str = "test-publisher";
pub const AUTHOR_NAME_1: &str = "test-author-1";
pub const AUTHOR_NAME_2: &str = "test-author-2";
pub const BOOK_TITLE_1: &str = "test-book-1";
pub const BOOK_TITLE_2: &str = "test-book-2";

/// Insert the fixed sample records unless they are already present.
///
/// The gate is the publisher name: when a publisher called
/// [`PUBLISHER_NAME`] exists the whole seed is skipped, so running the
/// demo repeatedly never duplicates rows. All inserts happen inside one
/// transaction; a failure leaves the database untouched.
pub async fn seed_sample_data(db: &DatabaseConnection) -> Result<(), DomainError> {
    let existing = publisher::Entity::find()
        .filter(publisher::Column::Name.eq(PUBLISHER_NAME))
        .one(db)
        .await
        .map_err(|e| DomainError::Query(e.to_string()))?;

    if existing.is_some() {
        tracing::debug!("sample data already present, skipping seed");
        return Ok(());
    }

    tracing::info!("seeding sample data");

    let txn = db
        .begin()
        .await
        .map_err(|e| DomainError::Constraint(e.to_string()))?;
    insert_fixtures(&txn)
        .await
        .map_err(|e| DomainError::Constraint(e.to_string()))?;
    txn.commit()
        .await
        .map_err(|e| DomainError::Constraint(e.to_string()))?;

    Ok(())
}

async fn insert_fixtures(txn: &DatabaseTransaction) -> Result<(), DbErr> {
    let publisher = publisher::ActiveModel {
        name: Set(PUBLISHER_NAME.to_owned()),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let author_1 = author::ActiveModel {
        name: Set(AUTHOR_NAME_1.to_owned()),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let author_2 = author::ActiveModel {
        name: Set(AUTHOR_NAME_2.to_owned()),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let book_1 = book::ActiveModel {
        title: Set(BOOK_TITLE_1.to_owned()),
        publisher_id: Set(publisher.id),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let book_2 = book::ActiveModel {
        title: Set(BOOK_TITLE_2.to_owned()),
        publisher_id: Set(publisher.id),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    // author-1 contributed to both books, author-2 only to the second.
    attach(txn, &author_1, &book_1).await?;
    attach(txn, &author_1, &book_2).await?;
    attach(txn, &author_2, &book_2).await?;

    Ok(())
}

async fn attach(
    txn: &DatabaseTransaction,
    author: &author::Model,
    book: &book::Model,
) -> Result<(), DbErr> {
    author_books::Entity::insert(author_books::ActiveModel {
        author_id: Set(author.id),
        book_id: Set(book.id),
    })
    .exec(txn)
    .await?;
    Ok(())
}
