// ==========================================
// Poultry Farm Records - Dashboard Service
// ==========================================
// Read-only aggregates for the overview cards: nothing here is
// persisted, every number is recomputed from the logs on request
// ==========================================

use crate::api::error::ApiResult;
use crate::engine::metrics::MetricsEngine;
use crate::engine::mortality::MortalityEngine;
use crate::repository::{
    CageRepository, DailyReportRepository, FeedPurchaseRepository, FlockRepository,
    HealthCheckRepository, TreatmentRepository,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ==========================================
// FarmSummary - overview card numbers
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmSummary {
    pub total_birds: i64,
    pub total_capacity: i64,
    /// Farm-wide fill level, percent of nominal capacity.
    pub capacity_utilization: f64,
    /// Lifetime egg production (units).
    pub total_eggs: i64,
    /// Lifetime recorded deaths across all flocks.
    pub total_deaths: i64,
    pub feed_cost: f64,
    pub treatment_cost: f64,
}

pub struct DashboardApi {
    cage_repo: Arc<CageRepository>,
    flock_repo: Arc<FlockRepository>,
    health_repo: Arc<HealthCheckRepository>,
    report_repo: Arc<DailyReportRepository>,
    treatment_repo: Arc<TreatmentRepository>,
    feed_repo: Arc<FeedPurchaseRepository>,
    metrics: MetricsEngine,
    mortality: MortalityEngine,
}

impl DashboardApi {
    pub fn new(
        cage_repo: Arc<CageRepository>,
        flock_repo: Arc<FlockRepository>,
        health_repo: Arc<HealthCheckRepository>,
        report_repo: Arc<DailyReportRepository>,
        treatment_repo: Arc<TreatmentRepository>,
        feed_repo: Arc<FeedPurchaseRepository>,
    ) -> Self {
        Self {
            cage_repo,
            flock_repo,
            health_repo,
            report_repo,
            treatment_repo,
            feed_repo,
            metrics: MetricsEngine::new(),
            mortality: MortalityEngine::new(),
        }
    }

    pub fn summary(&self) -> ApiResult<FarmSummary> {
        let total_birds = self.flock_repo.total_birds()?;
        let total_capacity: i64 = self
            .cage_repo
            .list_all()?
            .iter()
            .map(|c| c.capacity.max(0))
            .sum();

        let checks = self.health_repo.list_all()?;
        let total_deaths: i64 = self.mortality.deaths_by_flock(&checks).values().sum();

        Ok(FarmSummary {
            total_birds,
            total_capacity,
            capacity_utilization: self
                .metrics
                .capacity_utilization(total_birds, total_capacity),
            total_eggs: self.report_repo.total_eggs()?,
            total_deaths,
            feed_cost: self.feed_repo.total_cost()?,
            treatment_cost: self.treatment_repo.total_cost()?,
        })
    }
}
