// ==========================================
// Poultry Farm Records - Treatment Entity
// ==========================================
// Aligned with: treatment table
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Treatment - medication / vaccination / care record
// ==========================================
// No derived fields; costs are aggregated only for spend reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Treatment {
    pub treatment_id: String,
    pub treatment_date: NaiveDate,
    pub flock_id: String,          // FK -> flock
    pub treatment_type: String,    // free text, e.g. "Vaksin ND"
    pub cost: f64,
    pub notes: Option<String>,

    // Joined cage label (list queries only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cage_number: Option<String>,
}
