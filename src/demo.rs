//! End-to-end demo scenario
//!
//! Connects, provisions the schema, seeds the fixed sample data, then
//! walks the three read paths and renders each one as a labeled report.

use std::io::Write;

use sea_orm::DatabaseConnection;

use crate::db;
use crate::domain::{AuthorRepository, BookRepository, DomainError, PublisherRepository};
use crate::infrastructure::{
    SeaOrmAuthorRepository, SeaOrmBookRepository, SeaOrmPublisherRepository,
};
use crate::render;
use crate::seed;

pub async fn run(database_url: &str, out: &mut impl Write) -> Result<(), DomainError> {
    let db = db::init_db(database_url).await?;
    seed::seed_sample_data(&db).await?;
    render_report(&db, out).await
}

async fn render_report(db: &DatabaseConnection, out: &mut impl Write) -> Result<(), DomainError> {
    render::write_heading(out, "Book: has one Publisher, many-to-many Author")?;
    let books = SeaOrmBookRepository::new(db.clone())
        .list_with_relations()
        .await?;
    render::write_books(out, &books)?;

    render::write_heading(out, "Author: many-to-many Book")?;
    let authors = SeaOrmAuthorRepository::new(db.clone())
        .list_with_books()
        .await?;
    render::write_authors(out, &authors)?;

    render::write_heading(out, "Publisher: has many Book")?;
    let publishers = SeaOrmPublisherRepository::new(db.clone())
        .list_with_books()
        .await?;
    render::write_publishers(out, &publishers)?;

    Ok(())
}
