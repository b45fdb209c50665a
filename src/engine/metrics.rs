// ==========================================
// Poultry Farm Records - Metrics Engine
// ==========================================
// Responsibility: headline production KPIs
// Input: raw daily numbers for one flock
// Output: HD% and FCR, plus capacity utilization
// ==========================================
// Rule: stateless engine, all methods are pure functions. The
// presentation layer may call these on every input change; identical
// inputs always yield identical output.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// DailyMetrics - computed KPI pair
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyMetrics {
    /// Hen-day percentage: eggs laid per live bird, as a percent.
    pub hd_percent: f64,
    /// Feed conversion ratio: kg feed per kg egg mass.
    pub fcr: f64,
}

// ==========================================
// MetricsEngine
// ==========================================
pub struct MetricsEngine;

impl MetricsEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute HD% and FCR from one day's raw numbers.
    ///
    /// Forgiving-input policy: negative or NaN quantities are clamped
    /// to 0 before the formulas run (manual data entry, blank form
    /// fields arrive as 0). Both ratios are defined as 0 when their
    /// denominator is 0, so the function is total.
    pub fn compute(
        &self,
        egg_count: f64,
        egg_weight_kg: f64,
        feed_given_kg: f64,
        live_birds: f64,
    ) -> DailyMetrics {
        let egg_count = Self::clamp_quantity(egg_count);
        let egg_weight_kg = Self::clamp_quantity(egg_weight_kg);
        let feed_given_kg = Self::clamp_quantity(feed_given_kg);
        let live_birds = Self::clamp_quantity(live_birds);

        let hd_percent = if live_birds > 0.0 {
            Self::round2(egg_count / live_birds * 100.0)
        } else {
            0.0
        };

        let fcr = if egg_weight_kg > 0.0 {
            Self::round2(feed_given_kg / egg_weight_kg)
        } else {
            0.0
        };

        DailyMetrics { hd_percent, fcr }
    }

    /// Cage fill level as a percentage of nominal capacity.
    /// 0 when the capacity itself is 0 (capacity is informational and
    /// may legitimately be unset).
    pub fn capacity_utilization(&self, bird_count: i64, capacity: i64) -> f64 {
        if capacity <= 0 {
            return 0.0;
        }
        let birds = bird_count.max(0) as f64;
        Self::round2(birds / capacity as f64 * 100.0)
    }

    /// Clamp a manually entered quantity to the non-negative range.
    pub fn clamp_quantity(value: f64) -> f64 {
        if value.is_finite() && value > 0.0 {
            value
        } else {
            0.0
        }
    }

    fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self::new()
    }
}
