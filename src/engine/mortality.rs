// ==========================================
// Poultry Farm Records - Mortality Engine
// ==========================================
// Responsibility: lifetime loss rollups per flock
// Input: health-check records (caller supplies the set)
// Output: running totals used to auto-fill report fields
// ==========================================
// Rule: stateless engine, pure functions only
// ==========================================

use crate::domain::health::HealthCheck;
use std::collections::HashMap;

pub struct MortalityEngine;

impl MortalityEngine {
    pub fn new() -> Self {
        Self
    }

    /// Lifetime death total for one flock: the sum of dead_count over
    /// every health check recorded against it, with no date filter.
    /// This is the value shown (read-only) on a daily report; it is a
    /// running total, not a daily delta.
    pub fn cumulative_deaths(&self, flock_id: &str, checks: &[HealthCheck]) -> i64 {
        checks
            .iter()
            .filter(|c| c.flock_id == flock_id)
            .map(|c| c.dead_count.max(0))
            .sum()
    }

    /// Lifetime sick total for one flock, same shape as the death
    /// rollup. Used by the health dashboard cards.
    pub fn cumulative_sick(&self, flock_id: &str, checks: &[HealthCheck]) -> i64 {
        checks
            .iter()
            .filter(|c| c.flock_id == flock_id)
            .map(|c| c.sick_count.max(0))
            .sum()
    }

    /// Death totals for every flock present in the record set.
    /// Flocks with no checks simply do not appear (their total is 0).
    pub fn deaths_by_flock(&self, checks: &[HealthCheck]) -> HashMap<String, i64> {
        let mut totals: HashMap<String, i64> = HashMap::new();
        for check in checks {
            *totals.entry(check.flock_id.clone()).or_insert(0) += check.dead_count.max(0);
        }
        totals
    }
}

impl Default for MortalityEngine {
    fn default() -> Self {
        Self::new()
    }
}
