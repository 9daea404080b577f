//! The person entity — a single address-book entry.

use serde::{Deserialize, Serialize};

use crate::id::PersonId;

/// A single address-book entry.
///
/// Wire conventions live on this type:
/// - JSON keys are PascalCase (`FirstName`, `LastName`, `Email`, `Phone`).
/// - Every field defaults to the empty string, so any subset of keys is a
///   valid body. No field is validated beyond being a string.
/// - The identifier is **never** part of a JSON body. Requests carry it in
///   the URL path and responses omit it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Person {
    #[serde(skip)]
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl Person {
    /// Column names shared by CSV import, CSV export, and the export header
    /// row, in canonical order.
    pub const CSV_HEADER: [&'static str; 4] = ["FirstName", "LastName", "Email", "Phone"];

    /// An empty person carrying only an identifier.
    #[must_use]
    pub fn with_id(id: PersonId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Copy every non-empty field of `other` into `self`.
    ///
    /// This is the partial-update contract: an empty string means "field
    /// not provided, keep the stored value", so a merge can never clear a
    /// field back to empty.
    pub fn merge_non_empty(&mut self, other: Person) {
        if !other.first_name.is_empty() {
            self.first_name = other.first_name;
        }
        if !other.last_name.is_empty() {
            self.last_name = other.last_name;
        }
        if !other.email.is_empty() {
            self.email = other.email;
        }
        if !other.phone.is_empty() {
            self.phone = other.phone;
        }
    }

    /// The four text fields in canonical CSV column order.
    #[must_use]
    pub fn csv_record(&self) -> [&str; 4] {
        [&self.first_name, &self.last_name, &self.email, &self.phone]
    }
}
