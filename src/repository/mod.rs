// ==========================================
// Poultry Farm Records - Repository Layer
// ==========================================
// Responsibility: table-level data access, parameterized SQL only
// Rule: no business logic in repositories
// ==========================================

pub mod cage_repo;
pub mod error;
pub mod feed_repo;
pub mod flock_repo;
pub mod health_check_repo;
pub mod report_repo;
pub mod treatment_repo;
pub mod user_repo;

// Re-export repositories and error types
pub use cage_repo::CageRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use feed_repo::FeedPurchaseRepository;
pub use flock_repo::FlockRepository;
pub use health_check_repo::HealthCheckRepository;
pub use report_repo::DailyReportRepository;
pub use treatment_repo::TreatmentRepository;
pub use user_repo::UserRepository;
