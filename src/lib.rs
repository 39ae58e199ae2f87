//! Weekly shift roster solver.
//!
//! Fills a week of shift slots from a small staff roster. Each slot needs a
//! fixed headcount drawn from the staff who said they are available, subject
//! to pairwise "must work together" and "never work together" rules and to a
//! policy of soft preferences (favorites, people to keep off single-seat
//! shifts, last-resort staff, day-specific bonuses).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Staff`, `Day`, `Rule`, `Availability`,
//!   `RosterSnapshot`, `SolveResult`
//! - **`policy`**: Soft preferences and score weights (`PriorityPolicy`)
//! - **`scoring`**: Pluggable priority rules and the weighted `PriorityScorer`
//! - **`solver`**: Pool building, rule grouping, backtracking search,
//!   fallbacks, repairs, reporting
//! - **`validation`**: Input integrity checks (duplicate ids, dangling
//!   references, contradictory rules)
//! - **`week`**: Monday-based week identifiers
//! - **`presets`**: The stock weekly roster and its policy
//!
//! # Example
//!
//! ```
//! use u_roster::models::Rule;
//! use u_roster::presets::{weekly_policy, weekly_roster};
//! use u_roster::solve;
//!
//! let mut snapshot = weekly_roster().with_rule(Rule::never("r1", "ana", "leo"));
//! snapshot.availability.set("lauren", ["wed", "fri"]);
//! snapshot.availability.set("ana", ["fri", "sat"]);
//! snapshot.availability.set("leo", ["fri", "sat"]);
//!
//! let result = solve(&snapshot, &weekly_policy());
//! assert_eq!(result.assignment("wed"), &["lauren".to_string()]);
//! assert!(!result.ok);
//! assert!(!(result.is_assigned("fri", "ana") && result.is_assigned("fri", "leo")));
//! ```

pub mod models;
pub mod policy;
pub mod presets;
pub mod scoring;
pub mod solver;
pub mod validation;
pub mod week;

pub use models::{RosterSnapshot, SolveResult};
pub use policy::PriorityPolicy;
pub use solver::{solve, RosterSolver};
