pub use crate::cli::{command, run_app};
pub use crate::domain::{
    book::{self, ContactBook},
    contact::{self, Contact},
    search::{find_keys_by_first_name, search_by_name},
};
pub use crate::errors::AppError;
pub use crate::store::{AddOutcome, ContactStore, DeleteOutcome, SearchOutcome};
