// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger;
use crate::models::TransactionDraft;
use crate::utils::{parse_date, parse_decimal};
use anyhow::{Context, Result};
use rusqlite::Connection;
use serde::Deserialize;

#[derive(Deserialize)]
struct ImportRow {
    date: String,
    description: String,
    category: String,
    amount: String,
}

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(conn, sub),
        _ => Ok(()),
    }
}

fn import_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim().to_string();
    let mut rdr =
        csv::Reader::from_path(&path).with_context(|| format!("Open CSV at {}", path))?;

    let mut imported = 0usize;
    for (i, rec) in rdr.deserialize::<ImportRow>().enumerate() {
        // Header is line 1, so data row N sits on line N+1.
        let line = i + 2;
        let rec = rec.with_context(|| format!("{}:{}: malformed row", path, line))?;
        let draft = TransactionDraft {
            date: parse_date(&rec.date).with_context(|| format!("{}:{}", path, line))?,
            description: rec.description,
            category: rec.category,
            amount: parse_decimal(&rec.amount).with_context(|| format!("{}:{}", path, line))?,
        };
        ledger::add(conn, &draft).with_context(|| format!("{}:{}", path, line))?;
        imported += 1;
    }
    println!("Imported {} transactions from {}", imported, path);
    Ok(())
}
