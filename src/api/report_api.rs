// ==========================================
// Poultry Farm Records - Daily Report Service
// ==========================================
// The engines are the single source of truth for derived fields:
// HD%, FCR and the mortality rollup are recomputed on every write,
// so a stored report can never drift from the formulas
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::report::{DailyReport, DailyReportInput};
use crate::engine::guard::WriteGuard;
use crate::engine::metrics::MetricsEngine;
use crate::engine::mortality::MortalityEngine;
use crate::repository::{DailyReportRepository, HealthCheckRepository};
use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

pub struct ReportApi {
    report_repo: Arc<DailyReportRepository>,
    health_repo: Arc<HealthCheckRepository>,
    guard: WriteGuard,
    metrics: MetricsEngine,
    mortality: MortalityEngine,
}

impl ReportApi {
    pub fn new(
        report_repo: Arc<DailyReportRepository>,
        health_repo: Arc<HealthCheckRepository>,
    ) -> Self {
        Self {
            report_repo,
            health_repo,
            guard: WriteGuard::new(),
            metrics: MetricsEngine::new(),
            mortality: MortalityEngine::new(),
        }
    }

    pub fn list_reports(&self) -> ApiResult<Vec<DailyReport>> {
        Ok(self.report_repo.list_all()?)
    }

    pub fn create_report(&self, input: &DailyReportInput) -> ApiResult<DailyReport> {
        let report = self.build_report(Uuid::new_v4().to_string(), input)?;
        self.report_repo.insert(&report)?;

        tracing::info!(
            report_id = %report.report_id,
            flock_id = %report.flock_id,
            hd_percent = report.hd_percent,
            fcr = report.fcr,
            "daily report created"
        );
        Ok(report)
    }

    pub fn update_report(&self, report_id: &str, input: &DailyReportInput) -> ApiResult<DailyReport> {
        // 404 before recompute, so an unknown id never reads as a
        // validation problem
        if self.report_repo.find_by_id(report_id)?.is_none() {
            return Err(ApiError::NotFound(format!(
                "DailyReport (id={report_id}) does not exist"
            )));
        }

        let report = self.build_report(report_id.to_string(), input)?;
        self.report_repo.update(&report)?;
        Ok(report)
    }

    pub fn delete_report(&self, report_id: &str) -> ApiResult<()> {
        self.report_repo.delete(report_id)?;
        tracing::info!(report_id, "daily report deleted");
        Ok(())
    }

    /// Validate, clamp, and derive: everything between the raw form
    /// payload and a persistable row.
    fn build_report(&self, report_id: String, input: &DailyReportInput) -> ApiResult<DailyReport> {
        self.guard
            .validate_report_write(&input.report_date, &input.flock_id)?;

        let report_date = NaiveDate::parse_from_str(input.report_date.trim(), "%Y-%m-%d")
            .map_err(|_| {
                ApiError::InvalidInput(format!("invalid date: {}", input.report_date))
            })?;

        let egg_count = MetricsEngine::clamp_quantity(input.egg_count);
        let egg_weight_kg = MetricsEngine::clamp_quantity(input.egg_weight_kg);
        let feed_given_kg = MetricsEngine::clamp_quantity(input.feed_given_kg);
        let live_birds = MetricsEngine::clamp_quantity(input.live_birds);

        let derived = self
            .metrics
            .compute(egg_count, egg_weight_kg, feed_given_kg, live_birds);

        // Lifetime rollup across every health check for this flock
        let checks = self.health_repo.list_by_flock(&input.flock_id)?;
        let cumulative_deaths = self.mortality.cumulative_deaths(&input.flock_id, &checks);

        Ok(DailyReport {
            report_id,
            report_date,
            flock_id: input.flock_id.clone(),
            cage_id: input.cage_id.clone(),
            egg_count: egg_count as i64,
            egg_weight_kg,
            feed_given_kg,
            live_birds: live_birds as i64,
            cumulative_deaths,
            fcr: derived.fcr,
            hd_percent: derived.hd_percent,
            notes: input.notes.clone(),
            cage_number: None,
        })
    }
}
