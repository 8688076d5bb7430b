use std::fmt;

use crate::domain::Contact;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Exists,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Vec<Contact>),
    /// Carries the query that matched nothing.
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Carries the removed contact.
    Deleted(Contact),
    /// Carries the first name that matched nothing.
    NotFound(String),
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddOutcome::Added => write!(f, "Contact has been added"),
            AddOutcome::Exists => write!(f, "Contact exists."),
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Found(contacts) => {
                for (i, contact) in contacts.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{contact}")?;
                }
                Ok(())
            }
            SearchOutcome::NotFound(query) => write!(f, "Contact '{query}' not found."),
        }
    }
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteOutcome::Deleted(contact) => {
                write!(f, "Contact '{}' has been deleted.", contact.first_name)
            }
            DeleteOutcome::NotFound(first_name) => {
                write!(f, "Contact '{first_name}' not found.")
            }
        }
    }
}
