// ==========================================
// Poultry Farm Records - Treatment Repository
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::treatment::Treatment;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};

pub struct TreatmentRepository {
    conn: Arc<Mutex<Connection>>,
}

impl TreatmentRepository {
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

    /// List every treatment, newest first, joined with the cage label.
    pub fn list_all(&self) -> RepositoryResult<Vec<Treatment>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT t.treatment_id, t.treatment_date, t.flock_id,
                   t.treatment_type, t.cost, t.notes, c.cage_number
            FROM treatment t
            LEFT JOIN flock f ON t.flock_id = f.flock_id
            LEFT JOIN cage c ON f.cage_id = c.cage_id
            ORDER BY t.treatment_date DESC
            "#,
        )?;

        let treatments = stmt
            .query_map([], |row| {
                Ok(Treatment {
                    treatment_id: row.get(0)?,
                    treatment_date: row.get(1)?,
                    flock_id: row.get(2)?,
                    treatment_type: row.get(3)?,
                    cost: row.get(4)?,
                    notes: row.get(5)?,
                    cage_number: row.get(6)?,
                })
            })?
            .collect::<SqliteResult<Vec<Treatment>>>()?;

        Ok(treatments)
    }

    pub fn insert(&self, treatment: &Treatment) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO treatment
                (treatment_id, treatment_date, flock_id, treatment_type, cost, notes)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                treatment.treatment_id,
                treatment.treatment_date,
                treatment.flock_id,
                treatment.treatment_type,
                treatment.cost,
                treatment.notes,
            ],
        )?;

        Ok(())
    }

    pub fn update(&self, treatment: &Treatment) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        let affected = conn.execute(
            r#"
            UPDATE treatment
            SET treatment_date = ?1, flock_id = ?2, treatment_type = ?3,
                cost = ?4, notes = ?5
            WHERE treatment_id = ?6
            "#,
            params![
                treatment.treatment_date,
                treatment.flock_id,
                treatment.treatment_type,
                treatment.cost,
                treatment.notes,
                treatment.treatment_id,
            ],
        )?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Treatment".to_string(),
                id: treatment.treatment_id.clone(),
            });
        }
        Ok(())
    }

    pub fn delete(&self, treatment_id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        let affected = conn.execute(
            "DELETE FROM treatment WHERE treatment_id = ?1",
            params![treatment_id],
        )?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Treatment".to_string(),
                id: treatment_id.to_string(),
            });
        }
        Ok(())
    }

    /// Lifetime treatment spend.
    pub fn total_cost(&self) -> RepositoryResult<f64> {
        let conn = self.get_conn()?;

        let total: f64 = conn.query_row(
            "SELECT COALESCE(SUM(cost), 0) FROM treatment",
            [],
            |row| row.get(0),
        )?;

        Ok(total)
    }
}
