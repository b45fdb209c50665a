// ==========================================
// Poultry Farm Records - Write Guard
// ==========================================
// Responsibility: reject writes that would violate required-field
// or referential invariants, with a structured reason
// ==========================================
// Rule: stateless, synchronous, single evaluation per call; the
// caller queries dependents and supplies them as arguments
// ==========================================

use thiserror::Error;

// ==========================================
// GuardError - tagged validation failures
// ==========================================
// Every variant maps to a short, user-facing remediation; none are
// fatal and none are retried automatically.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    #[error("required field missing: {field}")]
    MissingField { field: &'static str },

    #[error("cage {cage_id} still houses {dependents} flock(s); remove them first")]
    ReferentialConflict { cage_id: String, dependents: usize },

    #[error("credential verification failed")]
    MismatchedSecret,
}

pub type GuardResult<T> = Result<T, GuardError>;

// ==========================================
// WriteGuard
// ==========================================
pub struct WriteGuard;

impl WriteGuard {
    pub fn new() -> Self {
        Self
    }

    /// A flock must name the cage it occupies.
    pub fn validate_flock_write(&self, cage_id: &str) -> GuardResult<()> {
        Self::require("cage_id", cage_id)
    }

    /// A daily report must carry its date and flock.
    pub fn validate_report_write(&self, report_date: &str, flock_id: &str) -> GuardResult<()> {
        Self::require("report_date", report_date)?;
        Self::require("flock_id", flock_id)
    }

    /// A health check must carry its date and flock.
    pub fn validate_health_check_write(
        &self,
        check_date: &str,
        flock_id: &str,
    ) -> GuardResult<()> {
        Self::require("check_date", check_date)?;
        Self::require("flock_id", flock_id)
    }

    /// A treatment must carry date, flock and the treatment kind.
    pub fn validate_treatment_write(
        &self,
        treatment_date: &str,
        flock_id: &str,
        treatment_type: &str,
    ) -> GuardResult<()> {
        Self::require("treatment_date", treatment_date)?;
        Self::require("flock_id", flock_id)?;
        Self::require("treatment_type", treatment_type)
    }

    /// A cage cannot be deleted while any flock references it. The
    /// caller counts dependents beforehand; the store's own FK
    /// rejection backstops races between that count and the delete.
    pub fn validate_cage_deletion(
        &self,
        cage_id: &str,
        referencing_flocks: usize,
    ) -> GuardResult<()> {
        if referencing_flocks > 0 {
            return Err(GuardError::ReferentialConflict {
                cage_id: cage_id.to_string(),
                dependents: referencing_flocks,
            });
        }
        Ok(())
    }

    fn require(field: &'static str, value: &str) -> GuardResult<()> {
        if value.trim().is_empty() {
            return Err(GuardError::MissingField { field });
        }
        Ok(())
    }
}

impl Default for WriteGuard {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// Unit tests
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flock_write_requires_cage() {
        let guard = WriteGuard::new();

        assert!(guard.validate_flock_write("cage-1").is_ok());
        assert_eq!(
            guard.validate_flock_write(""),
            Err(GuardError::MissingField { field: "cage_id" })
        );
        // Whitespace-only is absent too
        assert!(guard.validate_flock_write("   ").is_err());
    }

    #[test]
    fn test_report_write_names_missing_field() {
        let guard = WriteGuard::new();

        assert!(guard.validate_report_write("2025-12-08", "flock-1").is_ok());
        assert_eq!(
            guard.validate_report_write("", "flock-1"),
            Err(GuardError::MissingField {
                field: "report_date"
            })
        );
        assert_eq!(
            guard.validate_report_write("2025-12-08", ""),
            Err(GuardError::MissingField { field: "flock_id" })
        );
    }

    #[test]
    fn test_treatment_write_requires_type() {
        let guard = WriteGuard::new();

        assert!(guard
            .validate_treatment_write("2025-12-08", "flock-1", "Vaksin ND")
            .is_ok());
        assert_eq!(
            guard.validate_treatment_write("2025-12-08", "flock-1", ""),
            Err(GuardError::MissingField {
                field: "treatment_type"
            })
        );
    }

    #[test]
    fn test_cage_deletion_blocked_by_dependents() {
        let guard = WriteGuard::new();

        assert!(guard.validate_cage_deletion("cage-1", 0).is_ok());

        let err = guard.validate_cage_deletion("cage-1", 1).unwrap_err();
        match err {
            GuardError::ReferentialConflict { cage_id, dependents } => {
                assert_eq!(cage_id, "cage-1");
                assert_eq!(dependents, 1);
            }
            other => panic!("expected ReferentialConflict, got {other:?}"),
        }
    }
}
