//! Per-slot availability pools.

use std::collections::HashMap;

use crate::models::RosterSnapshot;

/// Slot id → staff ids available that slot, in roster order.
///
/// An empty pool is valid; it just makes the slot infeasible.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityIndex {
    pools: HashMap<String, Vec<String>>,
}

impl AvailabilityIndex {
    /// Builds pools for every slot of the snapshot.
    ///
    /// Availability keys that are not on the roster are ignored, and so
    /// are listed slot ids that do not exist.
    pub fn build(snapshot: &RosterSnapshot) -> Self {
        let pools = snapshot
            .days
            .iter()
            .map(|day| {
                let pool: Vec<String> = snapshot
                    .staff
                    .iter()
                    .filter(|s| snapshot.availability.is_available(&s.id, &day.id))
                    .map(|s| s.id.clone())
                    .collect();
                (day.id.clone(), pool)
            })
            .collect();
        Self { pools }
    }

    /// Pool for a slot (empty for unknown slots).
    pub fn pool(&self, day_id: &str) -> &[String] {
        self.pools.get(day_id).map(|p| p.as_slice()).unwrap_or(&[])
    }

    /// Pool size for a slot.
    pub fn available(&self, day_id: &str) -> usize {
        self.pool(day_id).len()
    }

    /// Whether a staff member is in a slot's pool.
    pub fn contains(&self, day_id: &str, staff_id: &str) -> bool {
        self.pool(day_id).iter().any(|s| s == staff_id)
    }
}
