// ==========================================
// Poultry Farm Records - Health Check Repository
// ==========================================
// Append-only log: no (flock, date) uniqueness is enforced, a second
// corrective entry on the same day is legitimate
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::health::HealthCheck;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};

pub struct HealthCheckRepository {
    conn: Arc<Mutex<Connection>>,
}

impl HealthCheckRepository {
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

    /// List every health check, newest first, joined with the cage
    /// label of the flock it belongs to.
    pub fn list_all(&self) -> RepositoryResult<Vec<HealthCheck>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT h.check_id, h.check_date, h.flock_id,
                   h.sick_count, h.dead_count, h.notes,
                   c.cage_number
            FROM health_check h
            LEFT JOIN flock f ON h.flock_id = f.flock_id
            LEFT JOIN cage c ON f.cage_id = c.cage_id
            ORDER BY h.check_date DESC
            "#,
        )?;

        let checks = stmt
            .query_map([], Self::map_row_joined)?
            .collect::<SqliteResult<Vec<HealthCheck>>>()?;

        Ok(checks)
    }

    /// Every check recorded against one flock, lifetime, no date
    /// filter. Input set for the mortality rollup.
    pub fn list_by_flock(&self, flock_id: &str) -> RepositoryResult<Vec<HealthCheck>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT check_id, check_date, flock_id, sick_count, dead_count, notes
            FROM health_check
            WHERE flock_id = ?1
            ORDER BY check_date
            "#,
        )?;

        let checks = stmt
            .query_map(params![flock_id], Self::map_row)?
            .collect::<SqliteResult<Vec<HealthCheck>>>()?;

        Ok(checks)
    }

    pub fn insert(&self, check: &HealthCheck) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO health_check
                (check_id, check_date, flock_id, sick_count, dead_count, notes)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                check.check_id,
                check.check_date,
                check.flock_id,
                check.sick_count,
                check.dead_count,
                check.notes,
            ],
        )?;

        Ok(())
    }

    pub fn delete(&self, check_id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        let affected = conn.execute(
            "DELETE FROM health_check WHERE check_id = ?1",
            params![check_id],
        )?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "HealthCheck".to_string(),
                id: check_id.to_string(),
            });
        }
        Ok(())
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<HealthCheck> {
        Ok(HealthCheck {
            check_id: row.get(0)?,
            check_date: row.get(1)?,
            flock_id: row.get(2)?,
            sick_count: row.get(3)?,
            dead_count: row.get(4)?,
            notes: row.get(5)?,
            cage_number: None,
        })
    }

    fn map_row_joined(row: &rusqlite::Row<'_>) -> rusqlite::Result<HealthCheck> {
        Ok(HealthCheck {
            check_id: row.get(0)?,
            check_date: row.get(1)?,
            flock_id: row.get(2)?,
            sick_count: row.get(3)?,
            dead_count: row.get(4)?,
            notes: row.get(5)?,
            cage_number: row.get(6)?,
        })
    }
}
