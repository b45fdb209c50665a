// ==========================================
// Poultry Farm Records - Service Layer
// ==========================================
// Responsibility: sequence guard -> engine -> repository for each
// operation and translate low-level errors into user-facing ones
// ==========================================

pub mod auth_api;
pub mod cage_api;
pub mod dashboard_api;
pub mod error;
pub mod flock_api;
pub mod records_api;
pub mod report_api;

// Re-export services and error types
pub use auth_api::AuthApi;
pub use cage_api::CageApi;
pub use dashboard_api::{DashboardApi, FarmSummary};
pub use error::{ApiError, ApiResult};
pub use flock_api::FlockApi;
pub use records_api::RecordsApi;
pub use report_api::ReportApi;
