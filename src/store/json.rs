use super::*;

// `None` when the file is missing or blank.
fn read_book(path: &Path) -> Result<Option<ContactBook>, AppError> {
    if !fs::exists(path)? {
        debug!("{} does not exist", path.display());
        return Ok(None);
    }

    let data = fs::read(path)?;

    // serde_json gives an error on empty input
    if data.iter().all(u8::is_ascii_whitespace) {
        debug!("{} is empty", path.display());
        return Ok(None);
    }

    // Bytes, not a String: bad encoding is a parse failure like any other corruption
    let book: ContactBook = serde_json::from_slice(&data)?;
    debug!("loaded {} contacts from {}", book.len(), path.display());
    Ok(Some(book))
}

/// Reads the book at `path` without touching the file. Missing or blank
/// files read as an empty book.
pub fn load(path: &Path) -> Result<ContactBook, AppError> {
    Ok(read_book(path)?.unwrap_or_default())
}

/// Reads the book at `path`, creating the file as `{}` when it is missing
/// or blank.
pub fn load_or_create(path: &Path) -> Result<ContactBook, AppError> {
    if let Some(book) = read_book(path)? {
        return Ok(book);
    }

    info!("initialising empty contact book at {}", path.display());
    let book = ContactBook::new();
    save(path, &book)?;
    Ok(book)
}

/// Overwrites the whole file with `book`.
pub fn save(path: &Path, book: &ContactBook) -> Result<(), AppError> {
    if !path.exists() {
        create_file_parent(path)?;
    }

    let data = helper::serialize_book(book)?;

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(&data)?;

    debug!("saved {} contacts to {}", book.len(), path.display());
    Ok(())
}
