// ==========================================
// Poultry Farm Records - Feed Purchase Repository
// ==========================================
// Feed purchases are independent of flock and cage; they exist for
// cost reporting only
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::feed::FeedPurchase;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};

pub struct FeedPurchaseRepository {
    conn: Arc<Mutex<Connection>>,
}

impl FeedPurchaseRepository {
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

    pub fn list_all(&self) -> RepositoryResult<Vec<FeedPurchase>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT purchase_id, feed_type, purchase_date, cost
            FROM feed_purchase
            ORDER BY purchase_date DESC
            "#,
        )?;

        let purchases = stmt
            .query_map([], |row| {
                Ok(FeedPurchase {
                    purchase_id: row.get(0)?,
                    feed_type: row.get(1)?,
                    purchase_date: row.get(2)?,
                    cost: row.get(3)?,
                })
            })?
            .collect::<SqliteResult<Vec<FeedPurchase>>>()?;

        Ok(purchases)
    }

    pub fn insert(&self, purchase: &FeedPurchase) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO feed_purchase (purchase_id, feed_type, purchase_date, cost)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                purchase.purchase_id,
                purchase.feed_type,
                purchase.purchase_date,
                purchase.cost,
            ],
        )?;

        Ok(())
    }

    pub fn update(&self, purchase: &FeedPurchase) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        let affected = conn.execute(
            r#"
            UPDATE feed_purchase
            SET feed_type = ?1, purchase_date = ?2, cost = ?3
            WHERE purchase_id = ?4
            "#,
            params![
                purchase.feed_type,
                purchase.purchase_date,
                purchase.cost,
                purchase.purchase_id,
            ],
        )?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "FeedPurchase".to_string(),
                id: purchase.purchase_id.clone(),
            });
        }
        Ok(())
    }

    pub fn delete(&self, purchase_id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        let affected = conn.execute(
            "DELETE FROM feed_purchase WHERE purchase_id = ?1",
            params![purchase_id],
        )?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "FeedPurchase".to_string(),
                id: purchase_id.to_string(),
            });
        }
        Ok(())
    }

    /// Lifetime feed spend.
    pub fn total_cost(&self) -> RepositoryResult<f64> {
        let conn = self.get_conn()?;

        let total: f64 = conn.query_row(
            "SELECT COALESCE(SUM(cost), 0) FROM feed_purchase",
            [],
            |row| row.get(0),
        )?;

        Ok(total)
    }
}
