//! Shift-slot model.
//!
//! A `Day` is a unit of demand, not necessarily a calendar day: a lunch
//! and a night shift of the same Sunday are two separate slots.

use serde::{Deserialize, Serialize};

/// A shift slot requiring a fixed headcount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// Stable identifier.
    pub id: String,
    /// Human-readable label (e.g., "Sunday (Lunch)").
    pub label: String,
    /// Exact headcount target.
    pub required: usize,
    /// Machine key matched by policy rules (e.g., "sat", "sun_lunch").
    pub code: String,
}

impl Day {
    /// Creates a slot with an empty label and code.
    pub fn new(id: impl Into<String>, required: usize) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            required,
            code: String::new(),
        }
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the machine code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Whether this slot has exactly one seat.
    #[inline]
    pub fn is_single_seat(&self) -> bool {
        self.required == 1
    }
}
