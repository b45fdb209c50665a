// ==========================================
// Poultry Farm Records - Daily Report Repository
// ==========================================
// fcr / hd_percent / cumulative_deaths are written exactly as the
// service layer computed them; this layer never derives anything
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::report::DailyReport;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use std::sync::{Arc, Mutex};

pub struct DailyReportRepository {
    conn: Arc<Mutex<Connection>>,
}

impl DailyReportRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// List every report, newest first, joined with the cage label.
    pub fn list_all(&self) -> RepositoryResult<Vec<DailyReport>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT r.report_id, r.report_date, r.flock_id, r.cage_id,
                   r.egg_count, r.egg_weight_kg, r.feed_given_kg,
                   r.live_birds, r.cumulative_deaths, r.fcr, r.hd_percent,
                   r.notes, c.cage_number
            FROM daily_report r
            LEFT JOIN flock f ON r.flock_id = f.flock_id
            LEFT JOIN cage c ON f.cage_id = c.cage_id
            ORDER BY r.report_date DESC
            "#,
        )?;

        let reports = stmt
            .query_map([], Self::map_row)?
            .collect::<SqliteResult<Vec<DailyReport>>>()?;

        Ok(reports)
    }

    pub fn find_by_id(&self, report_id: &str) -> RepositoryResult<Option<DailyReport>> {
        let conn = self.get_conn()?;

        let report = conn
            .query_row(
                r#"
                SELECT r.report_id, r.report_date, r.flock_id, r.cage_id,
                       r.egg_count, r.egg_weight_kg, r.feed_given_kg,
                       r.live_birds, r.cumulative_deaths, r.fcr, r.hd_percent,
                       r.notes, NULL
                FROM daily_report r
                WHERE r.report_id = ?1
                "#,
                params![report_id],
                Self::map_row,
            )
            .optional()?;

        Ok(report)
    }

    pub fn insert(&self, report: &DailyReport) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO daily_report
                (report_id, report_date, flock_id, cage_id,
                 egg_count, egg_weight_kg, feed_given_kg,
                 live_birds, cumulative_deaths, fcr, hd_percent, notes)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#,
            params![
                report.report_id,
                report.report_date,
                report.flock_id,
                report.cage_id,
                report.egg_count,
                report.egg_weight_kg,
                report.feed_given_kg,
                report.live_birds,
                report.cumulative_deaths,
                report.fcr,
                report.hd_percent,
                report.notes,
            ],
        )?;

        Ok(())
    }

    pub fn update(&self, report: &DailyReport) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        let affected = conn.execute(
            r#"
            UPDATE daily_report
            SET report_date = ?1,
                flock_id = ?2,
                cage_id = ?3,
                egg_count = ?4,
                egg_weight_kg = ?5,
                feed_given_kg = ?6,
                live_birds = ?7,
                cumulative_deaths = ?8,
                fcr = ?9,
                hd_percent = ?10,
                notes = ?11
            WHERE report_id = ?12
            "#,
            params![
                report.report_date,
                report.flock_id,
                report.cage_id,
                report.egg_count,
                report.egg_weight_kg,
                report.feed_given_kg,
                report.live_birds,
                report.cumulative_deaths,
                report.fcr,
                report.hd_percent,
                report.notes,
                report.report_id,
            ],
        )?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "DailyReport".to_string(),
                id: report.report_id.clone(),
            });
        }
        Ok(())
    }

    pub fn delete(&self, report_id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        let affected = conn.execute(
            "DELETE FROM daily_report WHERE report_id = ?1",
            params![report_id],
        )?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "DailyReport".to_string(),
                id: report_id.to_string(),
            });
        }
        Ok(())
    }

    /// Farm-wide lifetime egg total (units).
    pub fn total_eggs(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;

        let total: i64 = conn.query_row(
            "SELECT COALESCE(SUM(egg_count), 0) FROM daily_report",
            [],
            |row| row.get(0),
        )?;

        Ok(total)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<DailyReport> {
        Ok(DailyReport {
            report_id: row.get(0)?,
            report_date: row.get(1)?,
            flock_id: row.get(2)?,
            cage_id: row.get(3)?,
            egg_count: row.get(4)?,
            egg_weight_kg: row.get(5)?,
            feed_given_kg: row.get(6)?,
            live_birds: row.get(7)?,
            cumulative_deaths: row.get(8)?,
            fcr: row.get(9)?,
            hd_percent: row.get(10)?,
            notes: row.get(11)?,
            cage_number: row.get(12)?,
        })
    }
}
