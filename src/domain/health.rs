// ==========================================
// Poultry Farm Records - Health Check Entity
// ==========================================
// Aligned with: health_check table
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// HealthCheck - one inspection record
// ==========================================
// Append-only log: several records per flock per day are allowed
// (a corrective second entry is a normal operator workflow).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    pub check_id: String,
    pub check_date: NaiveDate,
    pub flock_id: String,       // FK -> flock
    pub sick_count: i64,
    pub dead_count: i64,
    pub notes: Option<String>,

    // Joined cage label (list queries only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cage_number: Option<String>,
}
