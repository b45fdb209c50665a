// ==========================================
// Poultry Farm Records - Daily Report Entity
// ==========================================
// Aligned with: daily_report table
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// DailyReport - one day of production for one flock
// ==========================================
// fcr, hd_percent and cumulative_deaths are derived fields,
// denormalized for historical query speed. They are recomputed by
// the engines on every write; stored values are never trusted from
// the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReport {
    pub report_id: String,
    pub report_date: NaiveDate,
    pub flock_id: String,          // FK -> flock
    pub cage_id: String,           // denormalized copy of the flock's cage
    pub egg_count: i64,            // eggs laid (units)
    pub egg_weight_kg: f64,        // egg mass (kg)
    pub feed_given_kg: f64,        // total feed dispensed (kg)
    pub live_birds: i64,           // live population that day
    pub cumulative_deaths: i64,    // lifetime rollup, not a daily delta
    pub fcr: f64,                  // feed conversion ratio (derived)
    pub hd_percent: f64,           // hen-day percentage (derived)
    pub notes: Option<String>,

    // Joined cage label (list queries only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cage_number: Option<String>,
}

// ==========================================
// DailyReportInput - write payload
// ==========================================
// What a caller may supply for create/update. Derived fields are
// intentionally absent: the service layer computes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReportInput {
    pub report_date: String, // ISO-8601; validated, not pre-parsed
    pub flock_id: String,
    pub cage_id: String,
    pub egg_count: f64,      // raw form values arrive as numbers
    pub egg_weight_kg: f64,
    pub feed_given_kg: f64,
    pub live_birds: f64,
    pub notes: Option<String>,
}
