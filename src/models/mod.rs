pub mod author;
pub mod author_books;
pub mod book;
pub mod publisher;
