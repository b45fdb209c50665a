// ==========================================
// Poultry Farm Records - Cage Service
// ==========================================
// Deletion is guarded twice: a dependent count up front for the
// domain-specific message, and the FK constraint underneath for
// races between the count and the delete
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::cage::Cage;
use crate::engine::guard::WriteGuard;
use crate::repository::{CageRepository, FlockRepository};
use std::sync::Arc;
use uuid::Uuid;

pub struct CageApi {
    cage_repo: Arc<CageRepository>,
    flock_repo: Arc<FlockRepository>,
    guard: WriteGuard,
}

impl CageApi {
    pub fn new(cage_repo: Arc<CageRepository>, flock_repo: Arc<FlockRepository>) -> Self {
        Self {
            cage_repo,
            flock_repo,
            guard: WriteGuard::new(),
        }
    }

    pub fn list_cages(&self) -> ApiResult<Vec<Cage>> {
        Ok(self.cage_repo.list_all()?)
    }

    /// Create a cage. Capacity is clamped to the non-negative range,
    /// matching the forgiving-input policy for manual entry.
    pub fn create_cage(&self, cage_number: &str, capacity: i64, location: &str) -> ApiResult<Cage> {
        if cage_number.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "required field missing: cage_number".to_string(),
            ));
        }

        let cage = Cage {
            cage_id: Uuid::new_v4().to_string(),
            cage_number: cage_number.trim().to_string(),
            capacity: capacity.max(0),
            location: location.trim().to_string(),
        };
        self.cage_repo.insert(&cage)?;

        tracing::info!(cage_id = %cage.cage_id, "cage created");
        Ok(cage)
    }

    pub fn update_cage(
        &self,
        cage_id: &str,
        cage_number: &str,
        capacity: i64,
        location: &str,
    ) -> ApiResult<()> {
        if cage_number.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "required field missing: cage_number".to_string(),
            ));
        }

        self.cage_repo.update(&Cage {
            cage_id: cage_id.to_string(),
            cage_number: cage_number.trim().to_string(),
            capacity: capacity.max(0),
            location: location.trim().to_string(),
        })?;
        Ok(())
    }

    /// Delete a cage unless any flock still references it.
    pub fn delete_cage(&self, cage_id: &str) -> ApiResult<()> {
        let dependents = self.flock_repo.count_by_cage(cage_id)?;
        self.guard.validate_cage_deletion(cage_id, dependents)?;

        // The FK constraint converts a stale dependent count into the
        // same conflict error instead of a partial write.
        self.cage_repo.delete(cage_id)?;

        tracing::info!(cage_id, "cage deleted");
        Ok(())
    }
}
