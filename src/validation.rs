//! Input validation for roster snapshots and policies.
//!
//! The solver tolerates malformed input (unknown ids never match, rules
//! with a missing endpoint are ignored). These checks are opt-in and
//! report everything they find at once. Detects:
//! - Duplicate staff, slot, or rule IDs
//! - Rules and availability entries naming unknown staff or slots
//! - Self-referencing and contradictory rules
//! - Policy entries that match nothing in the roster

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::models::{RosterSnapshot, RuleKind};
use crate::policy::PriorityPolicy;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities of the same kind share an ID.
    DuplicateId,
    /// A staff id that is not on the roster.
    UnknownStaff,
    /// An availability entry names a slot that doesn't exist.
    UnknownDay,
    /// A rule links a staff member to themselves.
    SelfRule,
    /// The same pair is both `Must` and `Never`.
    ConflictingRules,
    /// A policy entry names a slot code that no slot carries.
    UnknownDayCode,
    /// A paired-slot entry pairs a code with itself.
    InvalidPairing,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a roster snapshot.
///
/// Checks:
/// 1. No duplicate staff, slot, or rule IDs
/// 2. Rule endpoints are on the roster
/// 3. No rule links a staff member to themselves
/// 4. No pair is both `Must` and `Never`
/// 5. Availability keys are on the roster
/// 6. Availability entries name existing slots
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_snapshot(snapshot: &RosterSnapshot) -> ValidationResult {
    let mut errors = Vec::new();

    let mut staff_ids = HashSet::new();
    for s in &snapshot.staff {
        if !staff_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate staff ID: {}", s.id),
            ));
        }
    }

    let mut day_ids = HashSet::new();
    for d in &snapshot.days {
        if !day_ids.insert(d.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate day ID: {}", d.id),
            ));
        }
    }

    let mut rule_ids = HashSet::new();
    for rule in &snapshot.rules {
        if !rule_ids.insert(rule.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate rule ID: {}", rule.id),
            ));
        }
        for endpoint in [&rule.a, &rule.b] {
            if !staff_ids.contains(endpoint.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownStaff,
                    format!("Rule '{}' references unknown staff '{}'", rule.id, endpoint),
                ));
            }
        }
        if rule.a == rule.b {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfRule,
                format!("Rule '{}' links '{}' to themselves", rule.id, rule.a),
            ));
        }
    }

    errors.extend(detect_conflicts(snapshot));

    for (staff_id, days) in snapshot.availability.iter() {
        if !staff_ids.contains(staff_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownStaff,
                format!("Availability given for unknown staff '{staff_id}'"),
            ));
        }
        for day in days {
            if !day_ids.contains(day.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDay,
                    format!("Staff '{staff_id}' is available on unknown day '{day}'"),
                ));
            }
        }
    }

    finish(errors)
}

/// Finds unordered pairs carrying both a `Must` and a `Never` rule.
fn detect_conflicts(snapshot: &RosterSnapshot) -> Vec<ValidationError> {
    // Unordered pair → (first must rule, first never rule)
    let mut by_pair: HashMap<(&str, &str), (Option<&str>, Option<&str>)> = HashMap::new();
    let mut order = Vec::new();

    for rule in &snapshot.rules {
        let key = if rule.a <= rule.b {
            (rule.a.as_str(), rule.b.as_str())
        } else {
            (rule.b.as_str(), rule.a.as_str())
        };
        let entry = by_pair.entry(key).or_insert_with(|| {
            order.push(key);
            (None, None)
        });
        match rule.kind {
            RuleKind::Must => {
                entry.0.get_or_insert(rule.id.as_str());
            }
            RuleKind::Never => {
                entry.1.get_or_insert(rule.id.as_str());
            }
        }
    }

    order
        .into_iter()
        .filter_map(|key| match by_pair[&key] {
            (Some(must), Some(never)) => Some(ValidationError::new(
                ValidationErrorKind::ConflictingRules,
                format!(
                    "Rules '{must}' and '{never}' both require and forbid '{}' with '{}'",
                    key.0, key.1
                ),
            )),
            _ => None,
        })
        .collect()
}

/// Validates a policy against the roster it will run on.
///
/// Checks:
/// 1. Every staff id the policy mentions is on the roster
/// 2. Day overrides and paired slots name existing slot codes
/// 3. No paired entry pairs a code with itself
///
/// The solver runs regardless; ids that match nothing have no effect.
pub fn validate_policy(policy: &PriorityPolicy, snapshot: &RosterSnapshot) -> ValidationResult {
    let mut errors = Vec::new();

    for (field, id) in policy.referenced_staff() {
        if snapshot.staff_by_id(id).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownStaff,
                format!("Policy field '{field}' references unknown staff '{id}'"),
            ));
        }
    }

    let known_code = |code: &str| snapshot.day_by_code(code).is_some();

    for o in &policy.day_overrides {
        if !known_code(&o.day_code) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownDayCode,
                format!("Day override for '{}' names unknown day code '{}'", o.staff_id, o.day_code),
            ));
        }
    }

    for p in &policy.paired_days {
        if p.first_code == p.second_code {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPairing,
                format!("Paired days pair '{}' with itself", p.first_code),
            ));
        }
        for code in [&p.first_code, &p.second_code] {
            if !known_code(code) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDayCode,
                    format!("Paired days name unknown day code '{code}'"),
                ));
            }
        }
    }

    finish(errors)
}
