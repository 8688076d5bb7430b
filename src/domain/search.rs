use crate::prelude::{Contact, ContactBook};

/// Contacts whose first or last name contains `query`, in book order.
pub fn search_by_name<'a>(query: &str, book: &'a ContactBook) -> Vec<&'a Contact> {
    book.contacts()
        .filter(|contact| contact.name_contains(query))
        .collect()
}

/// Keys of every contact whose first name is exactly `first_name`, in book order.
pub fn find_keys_by_first_name<'a>(first_name: &str, book: &'a ContactBook) -> Vec<&'a str> {
    book.iter()
        .filter(|(_, contact)| contact.first_name == first_name)
        .map(|(key, _)| key)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> ContactBook {
        let mut book = ContactBook::new();
        for (first, last, phone) in [
            ("John", "Doe", "555-1234"),
            ("Joan", "Johnson", "555-9876"),
            ("Mary", "Jones", "555-0000"),
            ("John", "Smith", "555-4321"),
        ] {
            let contact = Contact::new(first.to_string(), last.to_string(), phone.to_string());
            book.insert(contact.key(), contact);
        }
        book
    }

    #[test]
    fn matches_first_or_last_name() {
        let book = sample_book();

        let found: Vec<String> = search_by_name("Jo", &book)
            .iter()
            .map(|c| c.key())
            .collect();

        assert_eq!(
            found,
            vec!["John_Doe", "Joan_Johnson", "Mary_Jones", "John_Smith"]
        );

        let found: Vec<String> = search_by_name("son", &book)
            .iter()
            .map(|c| c.key())
            .collect();
        assert_eq!(found, vec!["Joan_Johnson"]);
    }

    #[test]
    fn search_is_case_sensitive() {
        let book = sample_book();

        assert!(search_by_name("john", &book).is_empty());
        assert!(search_by_name("555", &book).is_empty());
    }

    #[test]
    fn first_name_lookup_is_exact() {
        let book = sample_book();

        assert_eq!(
            find_keys_by_first_name("John", &book),
            vec!["John_Doe", "John_Smith"]
        );
        assert!(find_keys_by_first_name("Jo", &book).is_empty());
        assert!(find_keys_by_first_name("john", &book).is_empty());
    }
}
