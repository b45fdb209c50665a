// ==========================================
// Poultry Farm Records - Cage Repository
// ==========================================
// Rule: no business logic; the deletion guard lives in the service
// layer, the FK constraint backstops it here
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::cage::Cage;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use std::sync::{Arc, Mutex};

pub struct CageRepository {
    conn: Arc<Mutex<Connection>>,
}

impl CageRepository {
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

    pub fn list_all(&self) -> RepositoryResult<Vec<Cage>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT cage_id, cage_number, capacity, location
            FROM cage
            ORDER BY cage_number
            "#,
        )?;

        let cages = stmt
            .query_map([], |row| {
                Ok(Cage {
                    cage_id: row.get(0)?,
                    cage_number: row.get(1)?,
                    capacity: row.get(2)?,
                    location: row.get(3)?,
                })
            })?
            .collect::<SqliteResult<Vec<Cage>>>()?;

        Ok(cages)
    }

    pub fn find_by_id(&self, cage_id: &str) -> RepositoryResult<Option<Cage>> {
        let conn = self.get_conn()?;

        let cage = conn
            .query_row(
                r#"
                SELECT cage_id, cage_number, capacity, location
                FROM cage
                WHERE cage_id = ?1
                "#,
                params![cage_id],
                |row| {
                    Ok(Cage {
                        cage_id: row.get(0)?,
                        cage_number: row.get(1)?,
                        capacity: row.get(2)?,
                        location: row.get(3)?,
                    })
                },
            )
            .optional()?;

        Ok(cage)
    }

    pub fn insert(&self, cage: &Cage) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO cage (cage_id, cage_number, capacity, location)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![cage.cage_id, cage.cage_number, cage.capacity, cage.location],
        )?;

        Ok(())
    }

    pub fn update(&self, cage: &Cage) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        let affected = conn.execute(
            r#"
            UPDATE cage
            SET cage_number = ?1, capacity = ?2, location = ?3
            WHERE cage_id = ?4
            "#,
            params![cage.cage_number, cage.capacity, cage.location, cage.cage_id],
        )?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Cage".to_string(),
                id: cage.cage_id.clone(),
            });
        }
        Ok(())
    }

    /// Delete one cage. Fails with ForeignKeyViolation while any flock
    /// still references it (foreign_keys is ON for every connection).
    pub fn delete(&self, cage_id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        let affected = conn.execute("DELETE FROM cage WHERE cage_id = ?1", params![cage_id])?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Cage".to_string(),
                id: cage_id.to_string(),
            });
        }
        Ok(())
    }
}
