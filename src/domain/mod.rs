// ==========================================
// Poultry Farm Records - Domain Layer
// ==========================================
// Responsibility: entity definitions shared by every layer
// Rule: no data access, no engine logic
// ==========================================

pub mod cage;
pub mod feed;
pub mod flock;
pub mod health;
pub mod report;
pub mod treatment;
pub mod user;

// Re-export core entities
pub use cage::Cage;
pub use feed::FeedPurchase;
pub use flock::Flock;
pub use health::HealthCheck;
pub use report::DailyReport;
pub use treatment::Treatment;
pub use user::{Session, UserAccount, UserProfile};
