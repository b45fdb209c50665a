// ==========================================
// Poultry Farm Records - User Repository
// ==========================================
// The password column is opaque at this layer: digest or legacy
// plaintext, the credential engine decides which
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::user::UserAccount;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use std::sync::{Arc, Mutex};

pub struct UserRepository {
    conn: Arc<Mutex<Connection>>,
}

impl UserRepository {
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

    pub fn find_by_username(&self, username: &str) -> RepositoryResult<Option<UserAccount>> {
        let conn = self.get_conn()?;

        let user = conn
            .query_row(
                r#"
                SELECT user_id, username, password, full_name, role, image_url, created_at
                FROM user_account
                WHERE username = ?1
                "#,
                params![username],
                Self::map_row,
            )
            .optional()?;

        Ok(user)
    }

    pub fn find_by_id(&self, user_id: &str) -> RepositoryResult<Option<UserAccount>> {
        let conn = self.get_conn()?;

        let user = conn
            .query_row(
                r#"
                SELECT user_id, username, password, full_name, role, image_url, created_at
                FROM user_account
                WHERE user_id = ?1
                "#,
                params![user_id],
                Self::map_row,
            )
            .optional()?;

        Ok(user)
    }

    pub fn list_all(&self) -> RepositoryResult<Vec<UserAccount>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT user_id, username, password, full_name, role, image_url, created_at
            FROM user_account
            ORDER BY username
            "#,
        )?;

        let users = stmt
            .query_map([], Self::map_row)?
            .collect::<SqliteResult<Vec<UserAccount>>>()?;

        Ok(users)
    }

    pub fn insert(&self, user: &UserAccount) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO user_account
                (user_id, username, password, full_name, role, image_url, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                user.user_id,
                user.username,
                user.password,
                user.full_name,
                user.role,
                user.image_url,
                user.created_at,
            ],
        )?;

        Ok(())
    }

    /// Overwrite the stored credential (password change or the
    /// legacy re-hash migration).
    pub fn update_password(&self, user_id: &str, digest: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        let affected = conn.execute(
            "UPDATE user_account SET password = ?1 WHERE user_id = ?2",
            params![digest, user_id],
        )?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "UserAccount".to_string(),
                id: user_id.to_string(),
            });
        }
        Ok(())
    }

    pub fn update_profile(
        &self,
        user_id: &str,
        full_name: &str,
        image_url: Option<&str>,
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        let affected = conn.execute(
            "UPDATE user_account SET full_name = ?1, image_url = ?2 WHERE user_id = ?3",
            params![full_name, image_url, user_id],
        )?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "UserAccount".to_string(),
                id: user_id.to_string(),
            });
        }
        Ok(())
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<UserAccount> {
        Ok(UserAccount {
            user_id: row.get(0)?,
            username: row.get(1)?,
            password: row.get(2)?,
            full_name: row.get(3)?,
            role: row.get(4)?,
            image_url: row.get(5)?,
            created_at: row.get(6)?,
        })
    }
}
