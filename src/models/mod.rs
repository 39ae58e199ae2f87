//! Roster domain models.
//!
//! Provides the input snapshot consumed by the solver (staff, shift slots,
//! pairwise rules, availability answers) and the solver's result.
//!
//! # Domain Mappings
//!
//! | u-roster | Restaurant | Clinic | Warehouse |
//! |----------|------------|--------|-----------|
//! | Staff | Waiter | Nurse | Picker |
//! | Day | Service (lunch/night) | Ward shift | Dock shift |
//! | Rule | "never together" | Mentor pairing | Forklift buddy |

mod availability;
mod day;
mod rule;
mod snapshot;
mod solution;
mod staff;

pub use availability::Availability;
pub use day::Day;
pub use rule::{all_satisfied, Rule, RuleKind};
pub use snapshot::{ResponseSummary, RosterSnapshot};
pub use solution::{DayReport, SolveResult};
pub use staff::Staff;
