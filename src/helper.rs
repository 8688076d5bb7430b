use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::domain::ContactBook;
use crate::errors::AppError;

const INDENT: &[u8] = b"    ";

/// Renders the book as the on-disk document: a JSON object indented by four spaces.
pub fn serialize_book(book: &ContactBook) -> Result<Vec<u8>, AppError> {
    let mut data = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut data, PrettyFormatter::with_indent(INDENT));
    book.serialize(&mut serializer)?;
    Ok(data)
}
