pub mod command;
pub mod run;

pub use run::{run_app, run_menu};

use crate::domain::{Contact, ContactBook};
use crate::errors::AppError;
use crate::store::SearchOutcome;
use std::io::{BufRead, Write};

// OUTPUT FUNCTIONS
pub fn show_menu<W: Write>(out: &mut W) -> Result<(), AppError> {
    writeln!(out, "\nEnter 'A' to Add to contacts")?;
    writeln!(out, "Enter 'Del' to delete contact")?;
    writeln!(out, "Enter 'd' to display the contacts")?;
    writeln!(out, "Enter 's' to search the contacts")?;
    writeln!(out, "Enter 'q' to quit")?;
    Ok(())
}

pub fn listing_row(i: usize, contact: &Contact) -> String {
    format!(
        "{i:>3}. {:<20} {:<20} {:15}",
        contact.first_name, contact.last_name, contact.phone_number
    )
}

pub fn print_book<W: Write>(out: &mut W, book: &ContactBook) -> Result<(), AppError> {
    if book.is_empty() {
        writeln!(out, "No contacts yet.")?;
        return Ok(());
    }

    for (i, contact) in book.contacts().enumerate() {
        writeln!(out, "{}", listing_row(i + 1, contact))?;
    }
    Ok(())
}

pub fn print_search<W: Write>(out: &mut W, outcome: &SearchOutcome) -> Result<(), AppError> {
    match outcome {
        SearchOutcome::Found(contacts) => {
            for (i, contact) in contacts.iter().enumerate() {
                writeln!(out, "{}", listing_row(i + 1, contact))?;
            }
        }
        SearchOutcome::NotFound(_) => writeln!(out, "{outcome}")?,
    }
    Ok(())
}

// INPUT FUNCTIONS

/// Prints `prompt` and reads one trimmed line. `None` once input is exhausted.
pub fn get_input<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>, AppError> {
    writeln!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn get_input_trims_and_detects_eof() -> Result<(), AppError> {
        let mut input = Cursor::new("  John \n");
        let mut out = Vec::new();

        assert_eq!(
            get_input(&mut input, &mut out, "Name?")?,
            Some("John".to_string())
        );
        assert_eq!(get_input(&mut input, &mut out, "Name?")?, None);
        assert_eq!(String::from_utf8_lossy(&out), "Name?\nName?\n");
        Ok(())
    }

    #[test]
    fn empty_book_prints_placeholder() -> Result<(), AppError> {
        let mut out = Vec::new();

        print_book(&mut out, &ContactBook::new())?;

        assert_eq!(String::from_utf8_lossy(&out), "No contacts yet.\n");
        Ok(())
    }

    #[test]
    fn listing_row_layout() {
        let contact = Contact::new(
            "John".to_string(),
            "Doe".to_string(),
            "555-1234".to_string(),
        );

        assert_eq!(
            listing_row(1, &contact),
            format!("  1. {:<20} {:<20} {:15}", "John", "Doe", "555-1234")
        );
    }
}
