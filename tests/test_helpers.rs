// ==========================================
// Test helpers
// ==========================================
// Responsibility: temp database creation, schema init, seed data
// ==========================================

use chrono::{NaiveDate, Utc};
use poultry_records::db;
use poultry_records::domain::{Cage, Flock, HealthCheck};
use rusqlite::Connection;
use std::error::Error;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

/// Create a temp database file with the full schema applied.
///
/// Returns the NamedTempFile (keep it alive for the test's duration)
/// and the path as a string.
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().unwrap().to_string();

    let conn = db::open_sqlite_connection(&db_path)?;
    db::init_schema(&conn)?;

    Ok((temp_file, db_path))
}

/// Open a configured connection to the test database, shareable
/// across repositories via from_connection.
pub fn open_shared_connection(db_path: &str) -> Result<Arc<Mutex<Connection>>, Box<dyn Error>> {
    let conn = db::open_sqlite_connection(db_path)?;
    Ok(Arc::new(Mutex::new(conn)))
}

pub fn make_cage(id: &str, number: &str, capacity: i64) -> Cage {
    Cage {
        cage_id: id.to_string(),
        cage_number: number.to_string(),
        capacity,
        location: "Blok A".to_string(),
    }
}

pub fn make_flock(id: &str, cage_id: &str, bird_count: i64) -> Flock {
    Flock {
        flock_id: id.to_string(),
        cage_id: cage_id.to_string(),
        bird_count,
        updated_at: Utc::now(),
        cage: None,
    }
}

pub fn make_health_check(id: &str, flock_id: &str, dead: i64, sick: i64) -> HealthCheck {
    HealthCheck {
        check_id: id.to_string(),
        check_date: NaiveDate::from_ymd_opt(2025, 12, 8).unwrap(),
        flock_id: flock_id.to_string(),
        sick_count: sick,
        dead_count: dead,
        notes: None,
        cage_number: None,
    }
}
