// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerError;
use crate::models::{Transaction, TransactionDraft, TxFilter};
use rusqlite::{params, Connection, OptionalExtension, Row};
use rust_decimal::Decimal;

const COLUMNS: &str = "id, date, description, category, amount, created_at";

/// Validate and persist a draft. Nothing is written when validation
/// fails; the stored record (with fresh id and created_at) is returned.
pub fn add(conn: &Connection, draft: &TransactionDraft) -> Result<Transaction, LedgerError> {
    validate(draft)?;
    conn.execute(
        "INSERT INTO transactions(date, description, category, amount) VALUES (?1, ?2, ?3, ?4)",
        params![
            draft.date.to_string(),
            draft.description.trim(),
            draft.category.trim(),
            draft.amount.to_string()
        ],
    )?;
    get(conn, conn.last_insert_rowid())
}

pub fn get(conn: &Connection, id: i64) -> Result<Transaction, LedgerError> {
    let sql = format!("SELECT {} FROM transactions WHERE id=?1", COLUMNS);
    conn.query_row(&sql, params![id], row_to_txn)
        .optional()?
        .ok_or(LedgerError::NotFound(id))
}

/// Full-record overwrite in a single statement; `id` and `created_at`
/// are never touched.
pub fn update(
    conn: &Connection,
    id: i64,
    draft: &TransactionDraft,
) -> Result<Transaction, LedgerError> {
    validate(draft)?;
    let changed = conn.execute(
        "UPDATE transactions SET date=?1, description=?2, category=?3, amount=?4 WHERE id=?5",
        params![
            draft.date.to_string(),
            draft.description.trim(),
            draft.category.trim(),
            draft.amount.to_string(),
            id
        ],
    )?;
    if changed == 0 {
        return Err(LedgerError::NotFound(id));
    }
    get(conn, id)
}

/// Permanent removal. Deleting an id twice fails with NotFound the
/// second time; callers decide whether that is benign.
pub fn delete(conn: &Connection, id: i64) -> Result<(), LedgerError> {
    let deleted = conn.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
    if deleted == 0 {
        return Err(LedgerError::NotFound(id));
    }
    Ok(())
}

/// Snapshot of transactions matching `filter`, ordered by date then id
/// so presentation is deterministic.
pub fn list(conn: &Connection, filter: &TxFilter) -> Result<Vec<Transaction>, LedgerError> {
    let mut sql = format!("SELECT {} FROM transactions WHERE 1=1", COLUMNS);
    let mut params_vec: Vec<String> = Vec::new();

    if let Some(from) = filter.from {
        sql.push_str(" AND date>=?");
        params_vec.push(from.to_string());
    }
    if let Some(to) = filter.to {
        sql.push_str(" AND date<=?");
        params_vec.push(to.to_string());
    }
    if let Some(ref cat) = filter.category {
        sql.push_str(" AND category=?");
        params_vec.push(cat.clone());
    }
    if let Some(ref q) = filter.search {
        sql.push_str(" AND LOWER(description) LIKE ?");
        params_vec.push(format!("%{}%", q.to_lowercase()));
    }
    sql.push_str(" ORDER BY date, id");
    if let Some(limit) = filter.limit {
        sql.push_str(" LIMIT ?");
        params_vec.push(limit.to_string());
    }

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = if params_vec.is_empty() {
        stmt.query([])?
    } else {
        let params: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        stmt.query(rusqlite::params_from_iter(params))?
    };

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        data.push(row_to_txn(r)?);
    }
    Ok(data)
}

/// Distinct category labels in use, alphabetical.
pub fn categories(conn: &Connection) -> Result<Vec<String>, LedgerError> {
    let mut stmt =
        conn.prepare("SELECT DISTINCT category FROM transactions ORDER BY category")?;
    let rows = stmt.query_map([], |r| r.get::<_, String>(0))?;
    let mut names = Vec::new();
    for row in rows {
        names.push(row?);
    }
    Ok(names)
}

/// Relabel every transaction in `old` to `new`; returns how many moved.
pub fn rename_category(conn: &Connection, old: &str, new: &str) -> Result<usize, LedgerError> {
    if new.trim().is_empty() {
        return Err(LedgerError::validation("category", "must not be empty"));
    }
    let changed = conn.execute(
        "UPDATE transactions SET category=?1 WHERE category=?2",
        params![new.trim(), old],
    )?;
    Ok(changed)
}

fn validate(draft: &TransactionDraft) -> Result<(), LedgerError> {
    if draft.description.trim().is_empty() {
        return Err(LedgerError::validation("description", "must not be empty"));
    }
    if draft.category.trim().is_empty() {
        return Err(LedgerError::validation("category", "must not be empty"));
    }
    if draft.amount.is_zero() {
        return Err(LedgerError::validation("amount", "must not be zero"));
    }
    Ok(())
}

fn row_to_txn(r: &Row) -> rusqlite::Result<Transaction> {
    let amount: String = r.get(4)?;
    let amount = amount.parse::<Decimal>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Transaction {
        id: r.get(0)?,
        date: r.get(1)?,
        description: r.get(2)?,
        category: r.get(3)?,
        amount,
        created_at: r.get(5)?,
    })
}
