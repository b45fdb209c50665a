// ==========================================
// Poultry Farm Records - Flock Service
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::flock::Flock;
use crate::engine::guard::WriteGuard;
use crate::repository::FlockRepository;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct FlockApi {
    flock_repo: Arc<FlockRepository>,
    guard: WriteGuard,
}

impl FlockApi {
    pub fn new(flock_repo: Arc<FlockRepository>) -> Self {
        Self {
            flock_repo,
            guard: WriteGuard::new(),
        }
    }

    pub fn list_flocks(&self) -> ApiResult<Vec<Flock>> {
        Ok(self.flock_repo.list_with_cages()?)
    }

    /// Register a flock in a cage. Bird counts are clamped to the
    /// non-negative range rather than rejected.
    pub fn create_flock(&self, cage_id: &str, bird_count: i64) -> ApiResult<Flock> {
        self.guard.validate_flock_write(cage_id)?;

        let flock = Flock {
            flock_id: Uuid::new_v4().to_string(),
            cage_id: cage_id.to_string(),
            bird_count: bird_count.max(0),
            updated_at: Utc::now(),
            cage: None,
        };
        self.flock_repo.insert(&flock)?;

        tracing::info!(flock_id = %flock.flock_id, cage_id, "flock created");
        Ok(flock)
    }

    /// Explicit population correction (the only direct edit of the
    /// bird count; day-to-day decreases come from health checks).
    pub fn update_flock(&self, flock_id: &str, cage_id: &str, bird_count: i64) -> ApiResult<()> {
        self.guard.validate_flock_write(cage_id)?;

        self.flock_repo.update(&Flock {
            flock_id: flock_id.to_string(),
            cage_id: cage_id.to_string(),
            bird_count: bird_count.max(0),
            updated_at: Utc::now(),
            cage: None,
        })?;
        Ok(())
    }

    pub fn delete_flock(&self, flock_id: &str) -> ApiResult<()> {
        self.flock_repo.delete(flock_id)?;
        tracing::info!(flock_id, "flock deleted");
        Ok(())
    }

    pub fn total_birds(&self) -> ApiResult<i64> {
        Ok(self.flock_repo.total_birds()?)
    }
}
