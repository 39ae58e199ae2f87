//! Roster snapshot: the solver's whole input.
//!
//! A snapshot is immutable for the duration of a solve. Identifiers are
//! assigned by whoever builds the snapshot; the solver never creates any.

use serde::{Deserialize, Serialize};

use super::{Availability, Day, Rule, Staff};

/// Staff, slots, rules, and availability for one week.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    /// Roster in display order. Pool order follows this order.
    pub staff: Vec<Staff>,
    /// Slots in display order.
    pub days: Vec<Day>,
    /// Pairwise rules.
    #[serde(default)]
    pub rules: Vec<Rule>,
    /// Answers collected so far.
    #[serde(default)]
    pub availability: Availability,
}

/// Who has answered the availability form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSummary {
    /// Roster size.
    pub total: usize,
    /// Number of roster members with an availability entry.
    pub responded: usize,
    /// Names of roster members without an entry, in roster order.
    pub missing: Vec<String>,
}

impl ResponseSummary {
    /// Whether everybody has answered.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

impl RosterSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a staff member.
    pub fn with_staff(mut self, staff: Staff) -> Self {
        self.staff.push(staff);
        self
    }

    /// Adds a slot.
    pub fn with_day(mut self, day: Day) -> Self {
        self.days.push(day);
        self
    }

    /// Adds a rule.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Replaces the availability map.
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Finds a staff member by id.
    pub fn staff_by_id(&self, id: &str) -> Option<&Staff> {
        self.staff.iter().find(|s| s.id == id)
    }

    /// Finds a staff member by name, ignoring case.
    pub fn staff_by_name(&self, name: &str) -> Option<&Staff> {
        self.staff.iter().find(|s| s.name_matches(name))
    }

    /// Finds the first slot with the given code.
    pub fn day_by_code(&self, code: &str) -> Option<&Day> {
        self.days.iter().find(|d| d.code == code)
    }

    /// Display name for a staff id (empty if unknown).
    pub fn name_of(&self, id: &str) -> &str {
        self.staff_by_id(id).map(|s| s.name.as_str()).unwrap_or("")
    }

    /// Summarizes who has answered.
    pub fn response_summary(&self) -> ResponseSummary {
        let missing: Vec<String> = self
            .staff
            .iter()
            .filter(|s| !self.availability.has_responded(&s.id))
            .map(|s| s.name.clone())
            .collect();
        ResponseSummary {
            total: self.staff.len(),
            responded: self.staff.len() - missing.len(),
            missing,
        }
    }
}
