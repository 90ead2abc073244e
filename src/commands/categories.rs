// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", _)) => {
            let data: Vec<Vec<String>> = ledger::categories(conn)?
                .into_iter()
                .map(|name| vec![name])
                .collect();
            println!("{}", pretty_table(&["Category"], data));
        }
        Some(("rename", sub)) => {
            let old = sub.get_one::<String>("old").unwrap();
            let new = sub.get_one::<String>("new").unwrap();
            let moved = ledger::rename_category(conn, old, new)?;
            println!("Renamed '{}' -> '{}' ({} transactions)", old, new, moved);
        }
        _ => {}
    }
    Ok(())
}
