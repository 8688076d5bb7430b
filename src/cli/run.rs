use crate::{
    cli::{
        self,
        command::{Cli, Commands, MenuCommand, parse_menu_command},
    },
    prelude::{AppError, Contact, ContactStore},
};
use clap::Parser;
use dotenv::dotenv;
use log::{debug, info};
use std::io::{self, BufRead, Write};

pub fn run_app() -> Result<(), AppError> {
    // .env must be read before clap resolves CONTACT_BOOK_FILE
    dotenv().ok();
    init_logger();

    let cli = Cli::parse();
    let store = ContactStore::new(cli.file)?;
    info!("using contact book at {}", store.path().display());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(command) => run_command(&store, command, &mut out),
        None => {
            let stdin = io::stdin();
            run_menu(&store, &mut stdin.lock(), &mut out)
        }
    }
}

fn init_logger() {
    // Logs go to stderr; stdout belongs to the menu
    let env = env_logger::Env::default().default_filter_or("warn");
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Runs one store operation from the command line.
pub fn run_command<W: Write>(
    store: &ContactStore,
    command: Commands,
    out: &mut W,
) -> Result<(), AppError> {
    match command {
        Commands::Add {
            first_name,
            last_name,
            phone,
        } => {
            let outcome = store.add(Contact::new(first_name, last_name, phone))?;
            writeln!(out, "{outcome}")?;
        }
        Commands::List => {
            let book = store.list()?;
            cli::print_book(out, &book)?;
        }
        Commands::Search { query } => {
            let outcome = store.search(&query)?;
            cli::print_search(out, &outcome)?;
        }
        Commands::Delete { first_name } => {
            let outcome = store.delete(&first_name)?;
            writeln!(out, "{outcome}")?;
        }
    }
    Ok(())
}

/// Interactive menu loop. Returns on `q` or end of input; store errors end the loop.
pub fn run_menu<R: BufRead, W: Write>(
    store: &ContactStore,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    writeln!(out, "Add a contact to your address book:")?;

    'menu: loop {
        cli::show_menu(out)?;

        let Some(action) = cli::get_input(input, out, "\nEnter an option to continue:")? else {
            break 'menu;
        };

        let command = match parse_menu_command(&action) {
            Ok(command) => command,
            Err(e) => {
                debug!("{e}");
                writeln!(out, "Invalid entry. Please try again.")?;
                continue 'menu;
            }
        };

        match command {
            MenuCommand::Add => {
                let Some(first_name) =
                    cli::get_input(input, out, "Enter the person's first name:")?
                else {
                    break 'menu;
                };
                let Some(last_name) = cli::get_input(input, out, "Enter the person's last name:")?
                else {
                    break 'menu;
                };
                let Some(phone) = cli::get_input(input, out, "Enter contact phone number:")? else {
                    break 'menu;
                };

                writeln!(out, "Adding to contact book")?;
                let outcome = store.add(Contact::new(first_name, last_name, phone))?;
                writeln!(out, "{outcome}")?;
            }
            MenuCommand::Display => {
                let book = store.list()?;
                cli::print_book(out, &book)?;
            }
            MenuCommand::Search => {
                let Some(query) = cli::get_input(input, out, "Enter a contact to search for:")?
                else {
                    break 'menu;
                };

                let outcome = store.search(&query)?;
                cli::print_search(out, &outcome)?;
            }
            MenuCommand::Delete => {
                let Some(first_name) = cli::get_input(input, out, "Enter the contact to delete:")?
                else {
                    break 'menu;
                };

                let outcome = store.delete(&first_name)?;
                writeln!(out, "{outcome}")?;
            }
            MenuCommand::Quit => break 'menu,
        }
    }

    out.flush()?;
    Ok(())
}
