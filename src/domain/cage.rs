// ==========================================
// Poultry Farm Records - Cage Entity
// ==========================================
// Aligned with: cage table
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Cage - a physical housing unit
// ==========================================
// Capacity is informational: the model does not cap a flock's
// bird count against it, it only feeds utilization reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cage {
    pub cage_id: String,     // unique id (UUID)
    pub cage_number: String, // operator-facing label, e.g. "A1"
    pub capacity: i64,       // nominal bird capacity (>= 0)
    pub location: String,    // free-text location
}
