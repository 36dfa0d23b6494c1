//! SQLite database module for blogline

mod content;
mod query;
mod schema;

use crate::content::ContentKind;
use crate::error::{BloglineError, Result};
use rusqlite::Connection;
use std::path::Path;

pub use schema::{create_schema, SchemaCreateResult, CURRENT_SCHEMA_VERSION};

/// Database file name inside a site directory
pub const DATABASE_FILE: &str = "blogline.db";

/// SQLite-backed content storage
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database inside the given site root
    pub fn open(site_root: &Path) -> Result<Self> {
        let db_path = site_root.join(DATABASE_FILE);
        let conn = Connection::open(&db_path).map_err(|e| {
            BloglineError::Other(format!(
                "failed to open database at {}: {}",
                db_path.display(),
                e
            ))
        })?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| BloglineError::Other(format!("failed to enable WAL mode: {}", e)))?;

        Self::with_connection(conn)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| BloglineError::db_operation("open in-memory database", e))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        let created = create_schema(&conn)?;
        if created == SchemaCreateResult::Created {
            tracing::info!("Initialized blogline database schema");
        }
        Ok(Database { conn })
    }

    pub fn count(&self, kind: ContentKind) -> Result<i64> {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM content WHERE kind = ?1",
                [kind.as_str()],
                |r| r.get(0),
            )
            .map_err(|e| BloglineError::Other(format!("failed to count {}s: {}", kind, e)))
    }

    pub fn get_schema_version(&self) -> Result<i64> {
        self.conn
            .query_row(
                "SELECT value FROM index_meta WHERE key = 'schema_version'",
                [],
                |r| {
                    let s: String = r.get(0)?;
                    Ok(s.parse().unwrap_or(0))
                },
            )
            .map_err(|e| BloglineError::Other(format!("failed to get schema version: {}", e)))
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        let _ = self.conn.pragma_update(None, "wal_checkpoint", "TRUNCATE");
    }
}
