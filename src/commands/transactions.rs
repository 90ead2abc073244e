// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger;
use crate::models::{Transaction, TransactionDraft, TxFilter};
use crate::utils::{fmt_money, maybe_print_json, month_range, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("update", sub)) => update(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let draft = draft_from_matches(sub)?;
    let txn = ledger::add(conn, &draft)?;
    println!(
        "Recorded #{}: {} {} '{}' ({})",
        txn.id,
        txn.date,
        fmt_money(&txn.amount),
        txn.description,
        txn.category
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.date.to_string(),
                    t.description.clone(),
                    t.category.clone(),
                    fmt_money(&t.amount),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Description", "Category", "Amount"], rows)
        );
    }
    Ok(())
}

fn update(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let draft = draft_from_matches(sub)?;
    let txn = ledger::update(conn, id, &draft)?;
    println!(
        "Updated #{}: {} {} '{}' ({})",
        txn.id,
        txn.date,
        fmt_money(&txn.amount),
        txn.description,
        txn.category
    );
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    ledger::delete(conn, id)?;
    println!("Deleted #{}", id);
    Ok(())
}

pub fn draft_from_matches(sub: &clap::ArgMatches) -> Result<TransactionDraft> {
    Ok(TransactionDraft {
        date: parse_date(sub.get_one::<String>("date").unwrap())?,
        description: sub.get_one::<String>("description").unwrap().clone(),
        category: sub.get_one::<String>("category").unwrap().clone(),
        amount: parse_decimal(sub.get_one::<String>("amount").unwrap())?,
    })
}

pub fn filter_from_matches(sub: &clap::ArgMatches) -> Result<TxFilter> {
    let mut filter = TxFilter::default();
    if let Some(month) = sub.get_one::<String>("month") {
        let (from, to) = month_range(month)?;
        filter.from = Some(from);
        filter.to = Some(to);
    }
    if let Some(s) = sub.get_one::<String>("from") {
        filter.from = Some(parse_date(s)?);
    }
    if let Some(s) = sub.get_one::<String>("to") {
        filter.to = Some(parse_date(s)?);
    }
    filter.category = sub.get_one::<String>("category").cloned();
    filter.search = sub.get_one::<String>("search").cloned();
    // Only `tx list` defines --limit; other filtered commands don't.
    filter.limit = sub.try_get_one::<usize>("limit").ok().flatten().copied();
    Ok(filter)
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let filter = filter_from_matches(sub)?;
    Ok(ledger::list(conn, &filter)?)
}
