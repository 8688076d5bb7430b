use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Contact;

/// Contacts keyed by their name key, kept in file order.
///
/// New keys are appended at the end. Serialized as a single JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    entries: Vec<(String, Contact)>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&Contact> {
        self.position(key).map(|idx| &self.entries[idx].1)
    }

    /// Inserts under `key` unless it is taken. Returns `false` and leaves the
    /// book untouched on collision.
    pub fn insert(&mut self, key: String, contact: Contact) -> bool {
        if self.contains_key(&key) {
            return false;
        }
        self.entries.push((key, contact));
        true
    }

    pub fn remove(&mut self, key: &str) -> Option<Contact> {
        let idx = self.position(key)?;
        Some(self.entries.remove(idx).1)
    }

    /// Removes the first entry, in book order, whose contact satisfies `pred`.
    pub fn remove_first<F>(&mut self, pred: F) -> Option<(String, Contact)>
    where
        F: Fn(&Contact) -> bool,
    {
        let idx = self.entries.iter().position(|(_, contact)| pred(contact))?;
        Some(self.entries.remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Contact)> {
        self.entries.iter().map(|(key, contact)| (key.as_str(), contact))
    }

    pub fn contacts(&self) -> impl Iterator<Item = &Contact> {
        self.entries.iter().map(|(_, contact)| contact)
    }

    // Repeated keys in a document: the last value wins, the first position is kept.
    fn upsert(&mut self, key: String, contact: Contact) {
        match self.position(&key) {
            Some(idx) => self.entries[idx].1 = contact,
            None => self.entries.push((key, contact)),
        }
    }
}

impl Serialize for ContactBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, contact) in &self.entries {
            map.serialize_entry(key, contact)?;
        }
        map.end()
    }
}

struct ContactBookVisitor;

impl<'de> Visitor<'de> for ContactBookVisitor {
    type Value = ContactBook;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object of contacts keyed by name")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut book = ContactBook::with_capacity(access.size_hint().unwrap_or(0));

        while let Some((key, contact)) = access.next_entry::<String, Contact>()? {
            book.upsert(key, contact);
        }

        Ok(book)
    }
}

impl<'de> Deserialize<'de> for ContactBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ContactBookVisitor)
    }
}
