// ==========================================
// Poultry Farm Records - Log Record Services
// ==========================================
// Health checks, treatments and feed purchases: append-mostly logs,
// individually editable, no cascade between them (the mortality
// rollup is a read-path computation, not a trigger)
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::feed::FeedPurchase;
use crate::domain::health::HealthCheck;
use crate::domain::treatment::Treatment;
use crate::engine::guard::WriteGuard;
use crate::engine::mortality::MortalityEngine;
use crate::repository::{FeedPurchaseRepository, HealthCheckRepository, TreatmentRepository};
use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

pub struct RecordsApi {
    health_repo: Arc<HealthCheckRepository>,
    treatment_repo: Arc<TreatmentRepository>,
    feed_repo: Arc<FeedPurchaseRepository>,
    guard: WriteGuard,
    mortality: MortalityEngine,
}

impl RecordsApi {
    pub fn new(
        health_repo: Arc<HealthCheckRepository>,
        treatment_repo: Arc<TreatmentRepository>,
        feed_repo: Arc<FeedPurchaseRepository>,
    ) -> Self {
        Self {
            health_repo,
            treatment_repo,
            feed_repo,
            guard: WriteGuard::new(),
            mortality: MortalityEngine::new(),
        }
    }

    // ==========================================
    // Health checks
    // ==========================================

    pub fn list_health_checks(&self) -> ApiResult<Vec<HealthCheck>> {
        Ok(self.health_repo.list_all()?)
    }

    pub fn create_health_check(
        &self,
        check_date: &str,
        flock_id: &str,
        sick_count: i64,
        dead_count: i64,
        notes: Option<&str>,
    ) -> ApiResult<HealthCheck> {
        self.guard
            .validate_health_check_write(check_date, flock_id)?;

        let check = HealthCheck {
            check_id: Uuid::new_v4().to_string(),
            check_date: parse_date(check_date)?,
            flock_id: flock_id.to_string(),
            sick_count: sick_count.max(0),
            dead_count: dead_count.max(0),
            notes: notes.map(str::to_string),
            cage_number: None,
        };
        self.health_repo.insert(&check)?;

        tracing::info!(check_id = %check.check_id, flock_id, "health check recorded");
        Ok(check)
    }

    pub fn delete_health_check(&self, check_id: &str) -> ApiResult<()> {
        self.health_repo.delete(check_id)?;
        Ok(())
    }

    /// Lifetime death total for one flock (auto-fill for the report
    /// form's read-only mortality field).
    pub fn cumulative_deaths(&self, flock_id: &str) -> ApiResult<i64> {
        let checks = self.health_repo.list_by_flock(flock_id)?;
        Ok(self.mortality.cumulative_deaths(flock_id, &checks))
    }

    // ==========================================
    // Treatments
    // ==========================================

    pub fn list_treatments(&self) -> ApiResult<Vec<Treatment>> {
        Ok(self.treatment_repo.list_all()?)
    }

    pub fn create_treatment(
        &self,
        treatment_date: &str,
        flock_id: &str,
        treatment_type: &str,
        cost: f64,
        notes: Option<&str>,
    ) -> ApiResult<Treatment> {
        self.guard
            .validate_treatment_write(treatment_date, flock_id, treatment_type)?;

        let treatment = Treatment {
            treatment_id: Uuid::new_v4().to_string(),
            treatment_date: parse_date(treatment_date)?,
            flock_id: flock_id.to_string(),
            treatment_type: treatment_type.trim().to_string(),
            cost: cost.max(0.0),
            notes: notes.map(str::to_string),
            cage_number: None,
        };
        self.treatment_repo.insert(&treatment)?;
        Ok(treatment)
    }

    pub fn update_treatment(&self, treatment: &Treatment) -> ApiResult<()> {
        self.guard.validate_treatment_write(
            &treatment.treatment_date.to_string(),
            &treatment.flock_id,
            &treatment.treatment_type,
        )?;
        Ok(self.treatment_repo.update(treatment)?)
    }

    pub fn delete_treatment(&self, treatment_id: &str) -> ApiResult<()> {
        Ok(self.treatment_repo.delete(treatment_id)?)
    }

    // ==========================================
    // Feed purchases
    // ==========================================

    pub fn list_feed_purchases(&self) -> ApiResult<Vec<FeedPurchase>> {
        Ok(self.feed_repo.list_all()?)
    }

    pub fn create_feed_purchase(
        &self,
        feed_type: &str,
        purchase_date: &str,
        cost: f64,
    ) -> ApiResult<FeedPurchase> {
        if feed_type.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "required field missing: feed_type".to_string(),
            ));
        }

        let purchase = FeedPurchase {
            purchase_id: Uuid::new_v4().to_string(),
            feed_type: feed_type.trim().to_string(),
            purchase_date: parse_date(purchase_date)?,
            cost: cost.max(0.0),
        };
        self.feed_repo.insert(&purchase)?;
        Ok(purchase)
    }

    pub fn update_feed_purchase(&self, purchase: &FeedPurchase) -> ApiResult<()> {
        Ok(self.feed_repo.update(purchase)?)
    }

    pub fn delete_feed_purchase(&self, purchase_id: &str) -> ApiResult<()> {
        Ok(self.feed_repo.delete(purchase_id)?)
    }

    /// Lifetime feed spend (cost reporting).
    pub fn total_feed_cost(&self) -> ApiResult<f64> {
        Ok(self.feed_repo.total_cost()?)
    }
}

fn parse_date(raw: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::InvalidInput(format!("invalid date: {raw}")))
}
