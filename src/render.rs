//! Plain-text rendering of hydrated records
//!
//! Each record becomes one section: a header line carrying the record's
//! display name, the record itself, then its related rows one per line.

use std::io::{self, Write};

use crate::domain::{
    Author, AuthorWithBooks, Book, BookWithRelations, Publisher, PublisherWithBooks,
};

pub fn write_heading(out: &mut impl Write, heading: &str) -> io::Result<()> {
    writeln!(out, "[{}]", heading)
}

pub fn write_books(out: &mut impl Write, books: &[BookWithRelations]) -> io::Result<()> {
    for entry in books {
        section_header(out, &entry.book.title)?;
        book_line(out, "book", &entry.book)?;
        publisher_line(out, "publisher", &entry.publisher)?;
        for (i, author) in entry.authors.iter().enumerate() {
            author_line(out, &format!("authors-{}", i), author)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_authors(out: &mut impl Write, authors: &[AuthorWithBooks]) -> io::Result<()> {
    for entry in authors {
        section_header(out, &entry.author.name)?;
        author_line(out, "author", &entry.author)?;
        for (i, book) in entry.books.iter().enumerate() {
            book_line(out, &format!("books-{}", i), book)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_publishers(out: &mut impl Write, publishers: &[PublisherWithBooks]) -> io::Result<()> {
    for entry in publishers {
        section_header(out, &entry.publisher.name)?;
        publisher_line(out, "publisher", &entry.publisher)?;
        for (i, book) in entry.books.iter().enumerate() {
            book_line(out, &format!("books-{}", i), book)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn section_header(out: &mut impl Write, name: &str) -> io::Result<()> {
    writeln!(out, "=========== {} ==========", name)
}

fn book_line(out: &mut impl Write, label: &str, book: &Book) -> io::Result<()> {
    writeln!(out, "{}: {{id: {}, title: {}}}", label, book.id, book.title)
}

fn author_line(out: &mut impl Write, label: &str, author: &Author) -> io::Result<()> {
    writeln!(
        out,
        "{}: {{id: {}, name: {}}}",
        label, author.id, author.name
    )
}

fn publisher_line(out: &mut impl Write, label: &str, publisher: &Publisher) -> io::Result<()> {
    writeln!(
        out,
        "{}: {{id: {}, name: {}}}",
        label, publisher.id, publisher.name
    )
}
