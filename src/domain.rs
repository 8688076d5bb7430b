pub mod book;
pub mod contact;
pub mod search;

pub use book::ContactBook;
pub use contact::Contact;
