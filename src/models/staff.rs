//! Staff model.
//!
//! A staff member is a schedulable person. Identity is the `id`; the
//! `name` is for display and for the collaborator's name lookup.

use serde::{Deserialize, Serialize};

/// A schedulable person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    /// Stable identifier, assigned once by the roster owner.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Staff {
    /// Creates a staff member.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Case-insensitive name comparison.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
