use std::fmt;

use serde::{Deserialize, Serialize};

/// A single contact record.
///
/// Field names on disk follow the `First_Name` / `Last_Name` / `Phone_Number`
/// layout of the backing file. Missing fields read back as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "First_Name", default)]
    pub first_name: String,

    #[serde(rename = "Last_Name", default)]
    pub last_name: String,

    #[serde(rename = "Phone_Number", default)]
    pub phone_number: String,
}

impl Contact {
    pub fn new(first_name: String, last_name: String, phone_number: String) -> Self {
        Contact {
            first_name,
            last_name,
            phone_number,
        }
    }

    /// Key under which the contact is stored: `first_last`.
    pub fn key(&self) -> String {
        format!("{}_{}", self.first_name, self.last_name)
    }

    /// Case-sensitive substring match on either name.
    pub fn name_contains(&self, query: &str) -> bool {
        self.first_name.contains(query) || self.last_name.contains(query)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.first_name, self.last_name, self.phone_number
        )
    }
}
