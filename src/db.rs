use sea_orm::sea_query::{ColumnDef, Index, Table, TableCreateStatement};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};

use crate::domain::DomainError;
use crate::models::{author, author_books, book, publisher};

/// Open a connection to the database behind `database_url`.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DomainError> {
    Database::connect(database_url)
        .await
        .map_err(|e| DomainError::Connection(e.to_string()))
}

/// Connect and make sure the schema exists.
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DomainError> {
    let db = connect(database_url).await?;
    provision_schema(&db).await?;
    Ok(db)
}

/// Create every table the demo needs, skipping tables that already exist.
///
/// Statements are built with the query builder so the same definitions
/// provision SQLite and MySQL alike. The tables carry no foreign key
/// clauses; the repositories verify referential integrity when rows are
/// hydrated.
pub async fn provision_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    for stmt in table_statements() {
        db.execute(backend.build(&stmt))
            .await
            .map_err(|e| DomainError::Schema(e.to_string()))?;
    }
    tracing::debug!("schema provisioned");
    Ok(())
}

fn table_statements() -> Vec<TableCreateStatement> {
    let publishers = Table::create()
        .table(publisher::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(publisher::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(publisher::Column::Name).string().not_null())
        .to_owned();

    let authors = Table::create()
        .table(author::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(author::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(author::Column::Name).string().not_null())
        .to_owned();

    let books = Table::create()
        .table(book::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(book::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(book::Column::Title).string().not_null())
        .col(
            ColumnDef::new(book::Column::PublisherId)
                .integer()
                .not_null(),
        )
        .to_owned();

    // Composite primary key keeps each author/book pair unique.
    let author_books = Table::create()
        .table(author_books::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(author_books::Column::AuthorId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(author_books::Column::BookId)
                .integer()
                .not_null(),
        )
        .primary_key(
            Index::create()
                .col(author_books::Column::AuthorId)
                .col(author_books::Column::BookId),
        )
        .to_owned();

    vec![publishers, authors, books, author_books]
}
