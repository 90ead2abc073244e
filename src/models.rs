// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A persisted ledger entry. `amount` is signed: positive for income,
/// negative for expense. `id` and `created_at` are assigned by storage
/// and never change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: Decimal,
    pub created_at: NaiveDateTime,
}

/// User-supplied fields of a transaction, before storage assigns
/// `id`/`created_at`. Used for both add and full-record update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: Decimal,
}

/// Optional narrowing for `ledger::list`. All bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct TxFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub limit: Option<usize>,
}
