// ==========================================
// Poultry Farm Records - SQLite Initialization
// ==========================================
// Goals:
// - one place for Connection::open PRAGMA behavior, so every module
//   runs with foreign keys enforced
// - one busy_timeout policy for concurrent writers
// - schema bootstrap for fresh databases
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// Default busy_timeout (milliseconds)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Apply the shared PRAGMA set to a connection.
///
/// foreign_keys and busy_timeout are per-connection settings, so this
/// must run for every connection that is opened.
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a connection with the shared configuration applied.
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Create every table if it does not exist yet.
///
/// The REFERENCES clauses are the storage-level backstop behind the
/// write guard: a cage deletion racing a flock insert fails here even
/// if the guard's dependent count was stale.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS cage (
            cage_id     TEXT PRIMARY KEY,
            cage_number TEXT NOT NULL,
            capacity    INTEGER NOT NULL DEFAULT 0,
            location    TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS flock (
            flock_id   TEXT PRIMARY KEY,
            cage_id    TEXT NOT NULL REFERENCES cage(cage_id),
            bird_count INTEGER NOT NULL DEFAULT 0,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS health_check (
            check_id   TEXT PRIMARY KEY,
            check_date TEXT NOT NULL,
            flock_id   TEXT NOT NULL REFERENCES flock(flock_id),
            sick_count INTEGER NOT NULL DEFAULT 0,
            dead_count INTEGER NOT NULL DEFAULT 0,
            notes      TEXT
        );

        CREATE TABLE IF NOT EXISTS daily_report (
            report_id         TEXT PRIMARY KEY,
            report_date       TEXT NOT NULL,
            flock_id          TEXT NOT NULL REFERENCES flock(flock_id),
            cage_id           TEXT NOT NULL,
            egg_count         INTEGER NOT NULL DEFAULT 0,
            egg_weight_kg     REAL NOT NULL DEFAULT 0,
            feed_given_kg     REAL NOT NULL DEFAULT 0,
            live_birds        INTEGER NOT NULL DEFAULT 0,
            cumulative_deaths INTEGER NOT NULL DEFAULT 0,
            fcr               REAL NOT NULL DEFAULT 0,
            hd_percent        REAL NOT NULL DEFAULT 0,
            notes             TEXT
        );

        CREATE TABLE IF NOT EXISTS treatment (
            treatment_id   TEXT PRIMARY KEY,
            treatment_date TEXT NOT NULL,
            flock_id       TEXT NOT NULL REFERENCES flock(flock_id),
            treatment_type TEXT NOT NULL,
            cost           REAL NOT NULL DEFAULT 0,
            notes          TEXT
        );

        CREATE TABLE IF NOT EXISTS feed_purchase (
            purchase_id   TEXT PRIMARY KEY,
            feed_type     TEXT NOT NULL,
            purchase_date TEXT NOT NULL,
            cost          REAL NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS user_account (
            user_id    TEXT PRIMARY KEY,
            username   TEXT NOT NULL UNIQUE,
            password   TEXT NOT NULL,
            full_name  TEXT NOT NULL DEFAULT '',
            role       TEXT NOT NULL DEFAULT 'operator',
            image_url  TEXT,
            created_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
