//! Delimited-text persistence: one line per record
//!
//! Two variants exist on disk. Loans and inventories are plain positional
//! CSV rows. Books use the legacy pipe format: `name: value` fields joined
//! by `||`, parsed by naive splitting.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

/// Read positional CSV records. Missing file reads as an empty collection.
pub(crate) fn read_records<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(error) => return Err(error.into()),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(content.as_slice());

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: T = result
            .map_err(|error| AppError::DataFormat(format!("{}: {}", path.display(), error)))?;
        records.push(record);
    }
    Ok(records)
}

/// Write positional CSV records, one line per entity
pub(crate) fn write_records<'a, T, I>(path: &Path, records: I) -> AppResult<()>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|error| AppError::DataFormat(format!("{}: {}", path.display(), error)))?;

    for record in records {
        writer
            .serialize(record)
            .map_err(|error| AppError::DataFormat(format!("{}: {}", path.display(), error)))?;
    }
    writer.flush()?;
    Ok(())
}

/// Read books from the pipe-delimited format
pub(crate) fn read_books(path: &Path) -> AppResult<Vec<Book>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(error) => return Err(error.into()),
    };

    let mut books = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        books.push(parse_book_line(path, line)?);
    }
    Ok(books)
}

/// Write books in the pipe-delimited format, one line per book.
///
/// The format has no escaping: a title or description containing `||`,
/// `: ` or a newline produces a line that [`read_books`] cannot parse
/// back.
pub(crate) fn write_books<'a, I>(path: &Path, books: I) -> AppResult<()>
where
    I: IntoIterator<Item = &'a Book>,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut content = String::new();
    for book in books {
        content.push_str(&format!(
            "id: {}||title: {}||description: {}||publishDate: {}||authorId: {}||genreId: {}\n",
            book.id, book.title, book.description, book.publish_date, book.author_id, book.genre_id
        ));
    }
    fs::write(path, content)?;
    Ok(())
}

fn parse_book_line(path: &Path, line: &str) -> AppResult<Book> {
    let format_error = |detail: String| AppError::DataFormat(format!("{}: {}", path.display(), detail));

    let mut id = None;
    let mut title = None;
    let mut description = None;
    let mut publish_date = None;
    let mut author_id = None;
    let mut genre_id = None;

    for segment in line.split("||") {
        let (name, value) = segment
            .split_once(": ")
            .ok_or_else(|| format_error(format!("malformed book field '{}'", segment)))?;
        match name {
            "id" => id = Some(parse_uuid(value).map_err(&format_error)?),
            "title" => title = Some(value.to_string()),
            "description" => description = Some(value.to_string()),
            "publishDate" => {
                publish_date = Some(
                    value
                        .parse()
                        .map_err(|_| format_error(format!("invalid publish date '{}'", value)))?,
                )
            }
            "authorId" => author_id = Some(parse_uuid(value).map_err(&format_error)?),
            "genreId" => genre_id = Some(parse_uuid(value).map_err(&format_error)?),
            other => return Err(format_error(format!("unknown book field '{}'", other))),
        }
    }

    Ok(Book {
        id: id.ok_or_else(|| format_error("book line missing id".into()))?,
        title: title.ok_or_else(|| format_error("book line missing title".into()))?,
        description: description.ok_or_else(|| format_error("book line missing description".into()))?,
        publish_date: publish_date.ok_or_else(|| format_error("book line missing publishDate".into()))?,
        author_id: author_id.ok_or_else(|| format_error("book line missing authorId".into()))?,
        genre_id: genre_id.ok_or_else(|| format_error("book line missing genreId".into()))?,
    })
}

fn parse_uuid(value: &str) -> Result<Uuid, String> {
    value
        .parse()
        .map_err(|_| format!("invalid uuid '{}'", value))
}
