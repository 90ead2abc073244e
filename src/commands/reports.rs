// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::transactions::filter_from_matches;
use crate::ledger;
use crate::models::TxFilter;
use crate::summary::{self, Granularity};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => print_summary(conn, sub)?,
        Some(("balance", sub)) => balance(conn, sub)?,
        Some(("cashflow", sub)) => cashflow(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn print_summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let g: Granularity = sub.get_one::<String>("granularity").unwrap().parse()?;
    let filter = filter_from_matches(sub)?;
    let summary = summary::get_summary(conn, &filter, g)?;

    if maybe_print_json(json_flag, jsonl_flag, &summary)? {
        return Ok(());
    }

    println!("Net balance: {}", fmt_money(&summary.net_balance));

    let cat_rows: Vec<Vec<String>> = summary
        .totals_by_category
        .iter()
        .map(|(cat, total)| vec![cat.clone(), fmt_money(total)])
        .collect();
    println!("{}", pretty_table(&["Category", "Total"], cat_rows));

    let period_rows: Vec<Vec<String>> = summary
        .totals_by_period
        .iter()
        .map(|(period, total)| vec![period.clone(), fmt_money(total)])
        .collect();
    println!("{}", pretty_table(&["Period", "Total"], period_rows));
    Ok(())
}

fn balance(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let filter = filter_from_matches(sub)?;
    let txns = ledger::list(conn, &filter)?;
    let entries = summary::running_balance(&txns);

    if maybe_print_json(json_flag, jsonl_flag, &entries)? {
        return Ok(());
    }

    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                e.txn.date.to_string(),
                e.txn.id.to_string(),
                e.txn.description.clone(),
                fmt_money(&e.txn.amount),
                fmt_money(&e.balance),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Id", "Description", "Amount", "Balance"], rows)
    );
    Ok(())
}

fn cashflow(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let g: Granularity = sub.get_one::<String>("granularity").unwrap().parse()?;
    let periods: usize = *sub.get_one::<usize>("periods").unwrap();

    let txns = ledger::list(conn, &TxFilter::default())?;
    let map = summary::cashflow(&txns, g);

    // Most recent periods first, like a bank statement.
    let mut data = Vec::new();
    for (period, flow) in map.iter().rev().take(periods) {
        data.push(vec![
            period.clone(),
            fmt_money(&flow.income),
            fmt_money(&flow.expense),
            fmt_money(&flow.net()),
        ]);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!(
            "{}",
            pretty_table(&["Period", "Income", "Expense", "Net"], data)
        );
    }
    Ok(())
}
