// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

/// Scan raw rows for records that would not pass validation today,
/// e.g. data edited outside the CLI or imported from elsewhere.
pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    let mut stmt =
        conn.prepare("SELECT id, date, description, amount FROM transactions ORDER BY id")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let date: String = r.get(1)?;
        let description: String = r.get(2)?;
        let amount: String = r.get(3)?;

        if chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
            rows.push(vec!["bad_date".into(), format!("#{} '{}'", id, date)]);
        }
        if description.trim().is_empty() {
            rows.push(vec!["blank_description".into(), format!("#{}", id)]);
        }
        match amount.parse::<Decimal>() {
            Ok(d) if d.is_zero() => {
                rows.push(vec!["zero_amount".into(), format!("#{}", id)]);
            }
            Ok(_) => {}
            Err(_) => {
                rows.push(vec!["bad_amount".into(), format!("#{} '{}'", id, amount)]);
            }
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
