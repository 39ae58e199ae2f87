//! Stock weekly roster and its policy.
//!
//! Six slots from Wednesday to Sunday night, nine staff with slug ids,
//! and the preferences the team runs with. Availability starts empty.

use crate::models::{Day, RosterSnapshot, Staff};
use crate::policy::{DayOverride, FallbackRule, PairedDays, PriorityPolicy};

const STAFF: [(&str, &str); 9] = [
    ("lauren", "Lauren"),
    ("marina", "Marina"),
    ("ana", "Ana"),
    ("leo", "Leo"),
    ("nayara", "Nayara"),
    ("duda", "Duda"),
    ("dani", "Dani"),
    ("mariana", "Mariana"),
    ("gabi", "Gabi"),
];

// (id, label, required, code)
const DAYS: [(&str, &str, usize, &str); 6] = [
    ("wed", "Wednesday", 1, "wed"),
    ("thu", "Thursday", 1, "thu"),
    ("fri", "Friday", 4, "fri"),
    ("sat", "Saturday", 5, "sat"),
    ("sun_lunch", "Sunday (Lunch)", 3, "sun_lunch"),
    ("sun_night", "Sunday (Night)", 2, "sun_night"),
];

/// The stock roster with no rules and no answers yet.
pub fn weekly_roster() -> RosterSnapshot {
    RosterSnapshot {
        staff: STAFF.iter().map(|&(id, name)| Staff::new(id, name)).collect(),
        days: DAYS
            .iter()
            .map(|&(id, label, required, code)| {
                Day::new(id, required).with_label(label).with_code(code)
            })
            .collect(),
        ..Default::default()
    }
}

/// The policy matching [`weekly_roster`].
pub fn weekly_policy() -> PriorityPolicy {
    PriorityPolicy::new()
        .with_top_tier(["marina", "lauren"])
        .with_avoid_single(["leo", "ana", "mariana"])
        .with_deprioritized(["duda", "dani"])
        .with_single_seat_nudge(["ana"])
        .with_day_override(DayOverride::new("sat", "gabi"))
        .with_fallback(FallbackRule::pick("ana").when_present("mariana"))
        .with_fallback(FallbackRule::pick("leo").when_unresolved())
        .with_fallback(FallbackRule::pick("mariana").when_unresolved())
        .with_paired_days(PairedDays::new("sun_lunch", "sun_night").with_exempt("gabi"))
}
