// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerError;
use crate::ledger;
use crate::models::{Transaction, TxFilter};
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Time-bucket size for period aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Day,
    Month,
    Year,
}

impl Granularity {
    pub fn key(&self, date: chrono::NaiveDate) -> String {
        match self {
            Granularity::Day => date.format("%Y-%m-%d").to_string(),
            Granularity::Month => date.format("%Y-%m").to_string(),
            Granularity::Year => date.format("%Y").to_string(),
        }
    }
}

impl FromStr for Granularity {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(Granularity::Day),
            "month" => Ok(Granularity::Month),
            "year" => Ok(Granularity::Year),
            other => Err(LedgerError::validation(
                "granularity",
                format!("'{}' is not one of day|month|year", other),
            )),
        }
    }
}

/// One transaction with the cumulative balance after it.
#[derive(Debug, Clone, Serialize)]
pub struct BalanceEntry {
    pub txn: Transaction,
    pub balance: Decimal,
}

/// Income/expense split for one period. Both sides are magnitudes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Flow {
    pub income: Decimal,
    pub expense: Decimal,
}

impl Flow {
    pub fn net(&self) -> Decimal {
        self.income - self.expense
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub net_balance: Decimal,
    pub totals_by_category: BTreeMap<String, Decimal>,
    pub totals_by_period: BTreeMap<String, Decimal>,
    pub running_balance: Vec<BalanceEntry>,
}

/// Sum of all amounts.
pub fn net_balance(txns: &[Transaction]) -> Decimal {
    txns.iter().map(|t| t.amount).sum()
}

/// Per-category sums. Categories with no transactions are absent.
pub fn totals_by_category(txns: &[Transaction]) -> BTreeMap<String, Decimal> {
    let mut map = BTreeMap::new();
    for t in txns {
        *map.entry(t.category.clone()).or_insert(Decimal::ZERO) += t.amount;
    }
    map
}

/// Per-period sums keyed by `Granularity::key`.
pub fn totals_by_period(txns: &[Transaction], g: Granularity) -> BTreeMap<String, Decimal> {
    let mut map = BTreeMap::new();
    for t in txns {
        *map.entry(g.key(t.date)).or_insert(Decimal::ZERO) += t.amount;
    }
    map
}

/// Cumulative balance in (date, id) order. The last entry always equals
/// `net_balance` over the same snapshot.
pub fn running_balance(txns: &[Transaction]) -> Vec<BalanceEntry> {
    let mut ordered: Vec<Transaction> = txns.to_vec();
    ordered.sort_by_key(|t| (t.date, t.id));
    let mut balance = Decimal::ZERO;
    ordered
        .into_iter()
        .map(|txn| {
            balance += txn.amount;
            BalanceEntry { txn, balance }
        })
        .collect()
}

/// Income vs expense per period, split on the sign of the amount.
pub fn cashflow(txns: &[Transaction], g: Granularity) -> BTreeMap<String, Flow> {
    let mut map: BTreeMap<String, Flow> = BTreeMap::new();
    for t in txns {
        let entry = map.entry(g.key(t.date)).or_default();
        if t.amount > Decimal::ZERO {
            entry.income += t.amount;
        } else {
            entry.expense += -t.amount;
        }
    }
    map
}

pub fn summarize(txns: &[Transaction], g: Granularity) -> Summary {
    Summary {
        net_balance: net_balance(txns),
        totals_by_category: totals_by_category(txns),
        totals_by_period: totals_by_period(txns, g),
        running_balance: running_balance(txns),
    }
}

/// Snapshot-then-summarize: the derived figures always reflect the
/// ledger as of this call, never a cache.
pub fn get_summary(
    conn: &Connection,
    filter: &TxFilter,
    g: Granularity,
) -> Result<Summary, LedgerError> {
    let txns = ledger::list(conn, filter)?;
    Ok(summarize(&txns, g))
}
