// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerError;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Cashbook", "cashbook"));

pub fn db_path() -> Result<PathBuf, LedgerError> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .ok_or_else(|| LedgerError::Unavailable("no platform data dir".into()))?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir)
        .map_err(|e| LedgerError::Unavailable(format!("create {}: {}", data_dir.display(), e)))?;
    Ok(data_dir.join("cashbook.sqlite"))
}

pub fn open_or_init() -> Result<Connection, LedgerError> {
    let path = db_path()?;
    let conn = Connection::open(&path)
        .map_err(|e| LedgerError::Unavailable(format!("open {}: {}", path.display(), e)))?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Idempotent: safe to run on every start, a no-op once the table exists.
pub fn init_schema(conn: &Connection) -> Result<(), LedgerError> {
    conn.execute_batch(
        r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS transactions(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        description TEXT NOT NULL,
        category TEXT NOT NULL,
        amount TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
    CREATE INDEX IF NOT EXISTS idx_transactions_category ON transactions(category);
    "#,
    )?;
    Ok(())
}
