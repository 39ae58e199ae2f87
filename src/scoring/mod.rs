//! Candidate scoring for search ordering.
//!
//! Scores never exclude anyone: they only decide the order in which a
//! slot's pool is explored, which in turn decides which feasible set the
//! search meets first.
//!
//! # Usage
//!
//! ```
//! use u_roster::models::Day;
//! use u_roster::policy::PriorityPolicy;
//! use u_roster::scoring::{PriorityScorer, ScoringContext};
//!
//! let policy = PriorityPolicy::new().with_top_tier(["b"]);
//! let scorer = PriorityScorer::from_policy(&policy);
//! let day = Day::new("d1", 1);
//! let ctx = ScoringContext::new(&day, &[], &policy);
//!
//! let pool = vec!["a".to_string(), "b".to_string()];
//! assert_eq!(scorer.sort_pool(&pool, &ctx), vec!["b".to_string(), "a".to_string()]);
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::ScoringContext;
pub use engine::PriorityScorer;

use std::fmt::Debug;

/// Score returned by a scoring rule.
///
/// **Higher score = explored earlier.**
pub type Score = f64;

/// A rule contributing to a candidate's score on one slot.
pub trait ScoreRule: Send + Sync + Debug {
    /// Rule name (e.g., "MUST_LINKS").
    fn name(&self) -> &'static str;

    /// Raw contribution for `staff_id`; the scorer applies the weight.
    fn evaluate(&self, staff_id: &str, context: &ScoringContext<'_>) -> Score;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
