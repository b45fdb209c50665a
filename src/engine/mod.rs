// ==========================================
// Poultry Farm Records - Engine Layer
// ==========================================
// Responsibility: derived metrics and write-consistency rules
// Rule: stateless engines, pure functions over supplied arguments;
// no data access, no shared mutable state
// ==========================================

pub mod credentials;
pub mod guard;
pub mod metrics;
pub mod mortality;

// Re-export engines
pub use credentials::{BcryptHasher, CredentialEngine, CredentialMatch, PasswordHasher};
pub use guard::{GuardError, GuardResult, WriteGuard};
pub use metrics::{DailyMetrics, MetricsEngine};
pub use mortality::MortalityEngine;
