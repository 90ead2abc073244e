// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cashbook::models::Transaction;
use cashbook::summary::{self, Granularity};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn txn(id: i64, date: &str, category: &str, amount: &str) -> Transaction {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    Transaction {
        id,
        date,
        description: format!("txn {id}"),
        category: category.to_string(),
        amount: amount.parse().unwrap(),
        created_at: date.and_hms_opt(12, 0, 0).unwrap(),
    }
}

#[test]
fn net_balance_is_the_sum_regardless_of_order() {
    let a = txn(1, "2024-01-10", "Income", "100");
    let b = txn(2, "2024-02-10", "Food", "-30.25");
    let c = txn(3, "2024-01-05", "Transport", "-9.75");

    let expected: Decimal = "60.00".parse().unwrap();
    assert_eq!(summary::net_balance(&[a.clone(), b.clone(), c.clone()]), expected);
    assert_eq!(summary::net_balance(&[c, a, b]), expected);
}

#[test]
fn running_balance_orders_by_date_then_id_and_ends_at_net() {
    // Deliberately out of order; two entries share a date.
    let txns = vec![
        txn(4, "2024-01-20", "Food", "-10"),
        txn(1, "2024-01-05", "Income", "100"),
        txn(3, "2024-01-05", "Transport", "-5"),
    ];

    let entries = summary::running_balance(&txns);
    let ids: Vec<i64> = entries.iter().map(|e| e.txn.id).collect();
    assert_eq!(ids, [1, 3, 4]);

    let balances: Vec<String> = entries.iter().map(|e| e.balance.to_string()).collect();
    assert_eq!(balances, ["100", "95", "85"]);
    assert_eq!(entries.last().unwrap().balance, summary::net_balance(&txns));
}

#[test]
fn running_balance_of_empty_ledger_is_empty() {
    assert!(summary::running_balance(&[]).is_empty());
    assert_eq!(summary::net_balance(&[]), Decimal::ZERO);
}

#[test]
fn totals_by_category_nets_signs_and_omits_absent_categories() {
    let txns = vec![
        txn(1, "2024-01-05", "A", "100"),
        txn(2, "2024-01-10", "A", "-30"),
    ];
    let totals = summary::totals_by_category(&txns);
    assert_eq!(totals.len(), 1);
    assert_eq!(totals["A"], "70".parse().unwrap());
    assert!(!totals.contains_key("B"));
}

#[test]
fn totals_by_period_buckets_by_granularity() {
    let txns = vec![
        txn(1, "2024-01-05", "Misc", "10"),
        txn(2, "2024-01-20", "Misc", "5"),
        txn(3, "2024-02-01", "Misc", "-3"),
        txn(4, "2025-02-01", "Misc", "7"),
    ];

    let monthly = summary::totals_by_period(&txns, Granularity::Month);
    assert_eq!(monthly["2024-01"], "15".parse().unwrap());
    assert_eq!(monthly["2024-02"], "-3".parse().unwrap());
    assert_eq!(monthly["2025-02"], "7".parse().unwrap());

    let daily = summary::totals_by_period(&txns, Granularity::Day);
    assert_eq!(daily["2024-01-05"], "10".parse().unwrap());

    let yearly = summary::totals_by_period(&txns, Granularity::Year);
    assert_eq!(yearly["2024"], "12".parse().unwrap());
    assert_eq!(yearly["2025"], "7".parse().unwrap());
}

#[test]
fn cashflow_splits_income_and_expense_per_period() {
    let txns = vec![
        txn(1, "2024-01-05", "Income", "100"),
        txn(2, "2024-01-10", "Food", "-40"),
        txn(3, "2024-02-02", "Food", "-25"),
    ];
    let flows = summary::cashflow(&txns, Granularity::Month);

    let jan = &flows["2024-01"];
    assert_eq!(jan.income, "100".parse().unwrap());
    assert_eq!(jan.expense, "40".parse().unwrap());
    assert_eq!(jan.net(), "60".parse().unwrap());

    let feb = &flows["2024-02"];
    assert_eq!(feb.income, Decimal::ZERO);
    assert_eq!(feb.expense, "25".parse().unwrap());
}

#[test]
fn summarize_is_consistent_across_its_views() {
    let txns = vec![
        txn(1, "2024-01-05", "Income", "100"),
        txn(2, "2024-01-10", "Food", "-40"),
        txn(3, "2024-02-02", "Food", "-25"),
    ];
    let s = summary::summarize(&txns, Granularity::Month);

    assert_eq!(s.net_balance, "35".parse().unwrap());
    assert_eq!(s.running_balance.last().unwrap().balance, s.net_balance);

    let period_sum: Decimal = s.totals_by_period.values().copied().sum();
    let category_sum: Decimal = s.totals_by_category.values().copied().sum();
    assert_eq!(period_sum, s.net_balance);
    assert_eq!(category_sum, s.net_balance);
}

#[test]
fn summarize_identical_input_yields_identical_output() {
    let txns = vec![
        txn(1, "2024-01-05", "Income", "100"),
        txn(2, "2024-01-10", "Food", "-40"),
    ];
    let a = summary::summarize(&txns, Granularity::Month);
    let b = summary::summarize(&txns, Granularity::Month);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn granularity_parses_known_labels_only() {
    assert_eq!("day".parse::<Granularity>().unwrap(), Granularity::Day);
    assert_eq!("Month".parse::<Granularity>().unwrap(), Granularity::Month);
    assert_eq!("YEAR".parse::<Granularity>().unwrap(), Granularity::Year);
    assert!("week".parse::<Granularity>().is_err());
}
