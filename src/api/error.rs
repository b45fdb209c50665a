// ==========================================
// Poultry Farm Records - Service Layer Errors
// ==========================================
// Responsibility: translate repository and guard errors into short,
// specific, user-facing messages; no write fails silently
// ==========================================

use crate::engine::guard::GuardError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// Service-layer error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== validation =====
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // ===== referential integrity =====
    #[error("{0}")]
    ReferentialConflict(String),

    // ===== authentication =====
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    // ===== data access =====
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("database error: {0}")]
    DatabaseError(String),

    // ===== generic =====
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{entity} (id={id}) does not exist"))
            }
            RepositoryError::ForeignKeyViolation(_) => ApiError::ReferentialConflict(
                "write violates a relationship between records; check that referenced records \
                 exist and that nothing still depends on the one being removed"
                    .to_string(),
            ),
            RepositoryError::UniqueConstraintViolation(msg) => {
                ApiError::InvalidInput(format!("duplicate value: {msg}"))
            }
            RepositoryError::ValidationError(msg) => ApiError::InvalidInput(msg),
            RepositoryError::DatabaseConnectionError(msg)
            | RepositoryError::LockError(msg)
            | RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

impl From<GuardError> for ApiError {
    fn from(err: GuardError) -> Self {
        match err {
            GuardError::MissingField { .. } => ApiError::InvalidInput(err.to_string()),
            GuardError::ReferentialConflict { .. } => {
                ApiError::ReferentialConflict(err.to_string())
            }
            GuardError::MismatchedSecret => {
                ApiError::AuthenticationFailed("old password is incorrect".to_string())
            }
        }
    }
}

/// Result alias for the service layer
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fk_violation_maps_to_referential_conflict() {
        let repo_err =
            RepositoryError::ForeignKeyViolation("FOREIGN KEY constraint failed".to_string());
        let api_err: ApiError = repo_err.into();
        match api_err {
            ApiError::ReferentialConflict(msg) => assert!(msg.contains("relationship")),
            other => panic!("expected ReferentialConflict, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_field_maps_to_invalid_input() {
        let guard_err = GuardError::MissingField { field: "flock_id" };
        let api_err: ApiError = guard_err.into();
        match api_err {
            ApiError::InvalidInput(msg) => assert!(msg.contains("flock_id")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_mismatched_secret_maps_to_authentication_failed() {
        let api_err: ApiError = GuardError::MismatchedSecret.into();
        assert!(matches!(api_err, ApiError::AuthenticationFailed(_)));
    }
}
