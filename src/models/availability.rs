//! Staff availability.
//!
//! Maps each staff id to the set of slot ids that person can work.
//! A staff id present with an empty set has answered "none"; an absent
//! id has not answered at all.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Staff id → available slot ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Availability {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl Availability {
    /// Creates an empty availability map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the slots a staff member is available for.
    pub fn set<I, S>(&mut self, staff_id: impl Into<String>, day_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.insert(
            staff_id.into(),
            day_ids.into_iter().map(Into::into).collect(),
        );
    }

    /// Builder: sets availability and returns self.
    pub fn with<I, S>(mut self, staff_id: impl Into<String>, day_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(staff_id, day_ids);
        self
    }

    /// Flips one slot for one staff member. Returns the new state.
    pub fn toggle(&mut self, staff_id: &str, day_id: &str) -> bool {
        let days = self.entries.entry(staff_id.to_string()).or_default();
        if days.remove(day_id) {
            false
        } else {
            days.insert(day_id.to_string());
            true
        }
    }

    /// Drops every answer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether `staff_id` listed `day_id`.
    pub fn is_available(&self, staff_id: &str, day_id: &str) -> bool {
        self.entries
            .get(staff_id)
            .is_some_and(|days| days.contains(day_id))
    }

    /// Slots listed by a staff member (`None` if they have not answered).
    pub fn days_for(&self, staff_id: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(staff_id)
    }

    /// Whether a staff member has answered, even with no slots.
    pub fn has_responded(&self, staff_id: &str) -> bool {
        self.entries.contains_key(staff_id)
    }

    /// Iterates over (staff id, slot ids).
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.entries.iter()
    }

    /// Number of staff entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nobody has answered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
