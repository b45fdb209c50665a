// ==========================================
// Poultry Farm Records - Core Library
// ==========================================
// Stack: Rust + SQLite
// Positioning: in-process record-keeping core
// (metrics, consistency rules, data access)
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and shared types
pub mod domain;

// Repository layer - data access
pub mod repository;

// Engine layer - business rules
pub mod engine;

// Service layer - business interfaces
pub mod api;

// Database infrastructure (connection init / PRAGMA policy / schema)
pub mod db;

// Configuration layer
pub mod config;

// Logging
pub mod logging;

// ==========================================
// Re-exports
// ==========================================

// Domain entities
pub use domain::{
    Cage, DailyReport, FeedPurchase, Flock, HealthCheck, Session, Treatment, UserAccount,
    UserProfile,
};

// Engines
pub use engine::{
    BcryptHasher, CredentialEngine, CredentialMatch, DailyMetrics, GuardError, MetricsEngine,
    MortalityEngine, PasswordHasher, WriteGuard,
};

// Services
pub use api::{AuthApi, CageApi, DashboardApi, FlockApi, RecordsApi, ReportApi};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Application name
pub const APP_NAME: &str = "Poultry Farm Records";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
