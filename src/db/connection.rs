//! SQLite connection handling.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use log::{error, info};
use rusqlite::Connection;

const SCHEMA: &str = include_str!("schema.sql");

/// Shared handle to the app database.
///
/// Clones are cheap and point at the same connection. All SQL runs through
/// `execute`, which serializes access behind a mutex; callers stay on their
/// own thread and block until their closure has run.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
    db_path: Option<Arc<PathBuf>>,
}

impl Database {
    /// Open (or create) the database file, apply pragmas, and ensure the
    /// schema exists.
    pub fn open(db_path: PathBuf) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }

        let conn = Connection::open(&db_path).with_context(|| {
            format!("failed to open SQLite database at {}", db_path.display())
        })?;

        if let Err(err) = conn.pragma_update(None, "journal_mode", "WAL") {
            error!("Failed to enable WAL mode: {err}");
        }

        let conn = init_connection(conn)?;
        info!("Database initialized at {}", db_path.display());

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            db_path: Some(Arc::new(db_path)),
        })
    }

    /// In-memory database, used by tests. WAL only applies to files, so it
    /// is skipped here.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .context("failed to open in-memory SQLite database")?;
        let conn = init_connection(conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            db_path: None,
        })
    }

    /// Path of the backing file, or `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.db_path.as_ref().map(|p| p.as_path())
    }

    pub(crate) fn execute<F, T>(&self, task: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        let mut conn = self
            .conn
            .lock()
            .map_err(|_| anyhow!("database mutex poisoned"))?;
        task(&mut conn)
    }
}

fn init_connection(conn: Connection) -> Result<Connection> {
    if let Err(err) = conn.pragma_update(None, "foreign_keys", "ON") {
        error!("Failed to enable foreign keys: {err}");
    }

    conn.execute_batch(SCHEMA)
        .context("failed to initialize database schema")?;

    Ok(conn)
}
