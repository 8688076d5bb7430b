use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::errors::AppError;
use crate::store::DEFAULT_BOOK_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// JSON file holding the contact book
    #[arg(long, env = "CONTACT_BOOK_FILE", default_value = DEFAULT_BOOK_PATH)]
    pub file: PathBuf,

    /// Run a single operation instead of the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact first name
        #[arg(long)]
        first_name: String,

        /// Contact last name
        #[arg(long)]
        last_name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,
    },
    /// List every contact
    List,
    /// Search first and last names (case-sensitive substring)
    Search {
        #[arg(long)]
        query: String,
    },
    /// Delete the first contact with this exact first name
    Delete {
        #[arg(long)]
        first_name: String,
    },
}

/// Interactive menu choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    Delete,
    Display,
    Search,
    Quit,
}

pub fn parse_menu_command(input: &str) -> Result<MenuCommand, AppError> {
    match input.trim().to_lowercase().as_str() {
        "a" => Ok(MenuCommand::Add),
        "del" => Ok(MenuCommand::Delete),
        "d" => Ok(MenuCommand::Display),
        "s" => Ok(MenuCommand::Search),
        "q" => Ok(MenuCommand::Quit),
        _ => Err(AppError::ParseCommand(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn menu_commands_are_case_insensitive() -> Result<(), AppError> {
        assert_eq!(parse_menu_command("a")?, MenuCommand::Add);
        assert_eq!(parse_menu_command("A")?, MenuCommand::Add);
        assert_eq!(parse_menu_command("Del")?, MenuCommand::Delete);
        assert_eq!(parse_menu_command("DEL")?, MenuCommand::Delete);
        assert_eq!(parse_menu_command("d")?, MenuCommand::Display);
        assert_eq!(parse_menu_command(" s ")?, MenuCommand::Search);
        assert_eq!(parse_menu_command("Q")?, MenuCommand::Quit);
        Ok(())
    }

    #[test]
    fn unknown_menu_input_is_rejected() {
        for input in ["", "x", "add", "de", "quit"] {
            assert!(matches!(
                parse_menu_command(input),
                Err(AppError::ParseCommand(_))
            ));
        }
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::parse_from([
            "contact-book",
            "--file",
            "book.json",
            "add",
            "--first-name",
            "John",
            "--last-name",
            "Doe",
            "--phone",
            "555-1234",
        ]);

        assert_eq!(cli.file, PathBuf::from("book.json"));
        assert!(matches!(
            cli.command,
            Some(Commands::Add { ref first_name, ref last_name, ref phone })
                if first_name == "John" && last_name == "Doe" && phone == "555-1234"
        ));
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::parse_from(["contact-book", "--file", "book.json"]);

        assert!(cli.command.is_none());
    }
}
