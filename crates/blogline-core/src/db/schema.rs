//! SQLite database schema for blogline

use rusqlite::Connection;

use crate::error::{BloglineError, Result};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Result of schema creation
#[derive(Debug, PartialEq, Eq)]
pub enum SchemaCreateResult {
    /// Fresh database, tables created
    Created,
    /// Existing database at the current version
    Current,
}

const SCHEMA_SQL: &str = r#"
-- Channels and posts share one table, tagged by kind
CREATE TABLE IF NOT EXISTS content (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    kind TEXT NOT NULL,
    title TEXT NOT NULL,
    language TEXT NOT NULL,
    status INTEGER NOT NULL DEFAULT 1,
    created TEXT NOT NULL,
    publish_date TEXT,
    parent_channel INTEGER,
    url_alias TEXT
);
CREATE INDEX IF NOT EXISTS idx_content_siblings
    ON content(kind, parent_channel, language, status);
CREATE INDEX IF NOT EXISTS idx_content_order
    ON content(publish_date, created, id);

-- Channel child references, in display order.
-- target_id has no foreign key: entries may point at deleted posts until reconciled.
CREATE TABLE IF NOT EXISTS channel_children (
    channel_id INTEGER NOT NULL,
    position INTEGER NOT NULL,
    target_id INTEGER NOT NULL,
    pinned INTEGER NOT NULL DEFAULT 0,
    PRIMARY KEY (channel_id, position)
);
CREATE INDEX IF NOT EXISTS idx_channel_children_target ON channel_children(target_id);

-- Database metadata
CREATE TABLE IF NOT EXISTS index_meta (
    key TEXT PRIMARY KEY,
    value TEXT
);
"#;

pub fn create_schema(conn: &Connection) -> Result<SchemaCreateResult> {
    let current_version: Option<i32> = conn
        .query_row(
            "SELECT value FROM index_meta WHERE key = 'schema_version'",
            [],
            |r| r.get::<_, String>(0).map(|s| s.parse().unwrap_or(0)),
        )
        .ok();

    match current_version {
        None => {
            conn.execute_batch(SCHEMA_SQL)
                .map_err(|e| BloglineError::db_operation("create database schema", e))?;
            conn.execute(
                "INSERT INTO index_meta (key, value) VALUES ('schema_version', ?1)",
                [&CURRENT_SCHEMA_VERSION.to_string()],
            )
            .map_err(|e| BloglineError::db_operation("record schema version", e))?;
            tracing::debug!(version = CURRENT_SCHEMA_VERSION, "schema_created");
            Ok(SchemaCreateResult::Created)
        }
        Some(v) if v == CURRENT_SCHEMA_VERSION => Ok(SchemaCreateResult::Current),
        Some(v) => Err(BloglineError::InvalidSite {
            reason: format!(
                "database schema version {} is not supported (expected {})",
                v, CURRENT_SCHEMA_VERSION
            ),
        }),
    }
}

#[cfg(test)]
pub fn force_set_schema_version(conn: &Connection, version: i32) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO index_meta (key, value) VALUES ('schema_version', ?1)",
        [&version.to_string()],
    )?;
    Ok(())
}
