use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn open_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)
        .with_context(|| format!("failed to open db: {}", db_path.display()))?;
    conn.execute("PRAGMA foreign_keys = ON", [])
        .context("failed to enable foreign key enforcement")?;
    Ok(conn)
}

pub fn init_db(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create parent dir: {}", parent.display()))?;
    }

    let conn = open_connection(db_path)?;

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS custom_framework (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            short_name  TEXT NOT NULL,
            description TEXT NOT NULL,
            use_logo    INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS custom_control (
            framework_id INTEGER NOT NULL,
            row_idx      INTEGER NOT NULL,
            control_id   TEXT NOT NULL,
            category     TEXT NOT NULL,
            category_key TEXT NOT NULL,
            description  TEXT NOT NULL,
            PRIMARY KEY (framework_id, row_idx),
            FOREIGN KEY (framework_id) REFERENCES custom_framework(id) ON DELETE CASCADE
        );
        ",
    )
    .context("failed to initialize schema")?;

    Ok(())
}
