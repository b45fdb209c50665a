// ==========================================
// Poultry Farm Records - Feed Purchase Entity
// ==========================================
// Aligned with: feed_purchase table
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Independent of flock and cage; aggregated for cost reporting only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPurchase {
    pub purchase_id: String,
    pub feed_type: String,
    pub purchase_date: NaiveDate,
    pub cost: f64,
}
