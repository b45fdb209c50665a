// ==========================================
// Poultry Farm Records - Flock Repository
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::cage::Cage;
use crate::domain::flock::Flock;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use std::sync::{Arc, Mutex};

pub struct FlockRepository {
    conn: Arc<Mutex<Connection>>,
}

impl FlockRepository {
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

    /// List every flock joined with its cage (the list view shows the
    /// cage label, capacity and location next to the population).
    pub fn list_with_cages(&self) -> RepositoryResult<Vec<Flock>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT f.flock_id, f.cage_id, f.bird_count, f.updated_at,
                   c.cage_number, c.capacity, c.location
            FROM flock f
            LEFT JOIN cage c ON f.cage_id = c.cage_id
            ORDER BY c.cage_number
            "#,
        )?;

        let flocks = stmt
            .query_map([], |row| {
                let cage_id: String = row.get(1)?;
                let cage_number: Option<String> = row.get(4)?;
                Ok(Flock {
                    flock_id: row.get(0)?,
                    cage_id: cage_id.clone(),
                    bird_count: row.get(2)?,
                    updated_at: row.get(3)?,
                    cage: cage_number.map(|number| Cage {
                        cage_id,
                        cage_number: number,
                        capacity: row.get(5).unwrap_or(0),
                        location: row.get(6).unwrap_or_default(),
                    }),
                })
            })?
            .collect::<SqliteResult<Vec<Flock>>>()?;

        Ok(flocks)
    }

    pub fn find_by_id(&self, flock_id: &str) -> RepositoryResult<Option<Flock>> {
        let conn = self.get_conn()?;

        let flock = conn
            .query_row(
                r#"
                SELECT flock_id, cage_id, bird_count, updated_at
                FROM flock
                WHERE flock_id = ?1
                "#,
                params![flock_id],
                |row| {
                    Ok(Flock {
                        flock_id: row.get(0)?,
                        cage_id: row.get(1)?,
                        bird_count: row.get(2)?,
                        updated_at: row.get(3)?,
                        cage: None,
                    })
                },
            )
            .optional()?;

        Ok(flock)
    }

    pub fn insert(&self, flock: &Flock) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO flock (flock_id, cage_id, bird_count, updated_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                flock.flock_id,
                flock.cage_id,
                flock.bird_count,
                flock.updated_at
            ],
        )?;

        Ok(())
    }

    pub fn update(&self, flock: &Flock) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        let affected = conn.execute(
            r#"
            UPDATE flock
            SET cage_id = ?1, bird_count = ?2, updated_at = ?3
            WHERE flock_id = ?4
            "#,
            params![
                flock.cage_id,
                flock.bird_count,
                flock.updated_at,
                flock.flock_id
            ],
        )?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Flock".to_string(),
                id: flock.flock_id.clone(),
            });
        }
        Ok(())
    }

    pub fn delete(&self, flock_id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        let affected =
            conn.execute("DELETE FROM flock WHERE flock_id = ?1", params![flock_id])?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Flock".to_string(),
                id: flock_id.to_string(),
            });
        }
        Ok(())
    }

    /// Number of flocks housed in one cage. Feeds the deletion guard.
    pub fn count_by_cage(&self, cage_id: &str) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM flock WHERE cage_id = ?1",
            params![cage_id],
            |row| row.get(0),
        )?;

        Ok(count as usize)
    }

    /// Farm-wide bird total.
    pub fn total_birds(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;

        let total: i64 = conn.query_row(
            "SELECT COALESCE(SUM(bird_count), 0) FROM flock",
            [],
            |row| row.get(0),
        )?;

        Ok(total)
    }
}
