// ==========================================
// Poultry Farm Records - Flock Entity
// ==========================================
// Aligned with: flock table
// ==========================================

use crate::domain::cage::Cage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Flock - a tracked bird population
// ==========================================
// One flock occupies exactly one cage at a time. The bird count
// never goes negative; decreases come from recorded deaths or an
// explicit population correction, not incidental edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flock {
    pub flock_id: String,
    pub cage_id: String,            // FK -> cage
    pub bird_count: i64,            // current population (>= 0)
    pub updated_at: DateTime<Utc>,  // last population change

    // Joined cage data (list queries only, not persisted here)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cage: Option<Cage>,
}
