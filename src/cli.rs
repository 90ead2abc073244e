// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print output as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print output as one JSON object per line"),
    )
}

fn filter_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("from").long("from").help("Start date (YYYY-MM-DD), inclusive"))
        .arg(Arg::new("to").long("to").help("End date (YYYY-MM-DD), inclusive"))
        .arg(
            Arg::new("month")
                .long("month")
                .conflicts_with_all(["from", "to"])
                .help("Restrict to one month (YYYY-MM)"),
        )
        .arg(Arg::new("category").long("category").help("Exact category label"))
        .arg(Arg::new("search").long("search").help("Case-insensitive text in description"))
}

fn draft_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("date")
            .long("date")
            .required(true)
            .help("Transaction date (YYYY-MM-DD)"),
    )
    .arg(
        Arg::new("amount")
            .long("amount")
            .required(true)
            .allow_hyphen_values(true)
            .help("Signed amount: positive income, negative expense"),
    )
    .arg(
        Arg::new("category")
            .long("category")
            .required(true)
            .help("Category label"),
    )
    .arg(
        Arg::new("description")
            .long("description")
            .required(true)
            .help("What the transaction was for"),
    )
}

pub fn build_cli() -> Command {
    Command::new("cashbook")
        .about("Personal income/expense ledger with category and period summaries")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the database file and schema"))
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(draft_args(Command::new("add").about("Record a transaction")))
                .subcommand(json_flags(filter_args(
                    Command::new("list").about("List transactions").arg(
                        Arg::new("limit")
                            .long("limit")
                            .value_parser(value_parser!(usize))
                            .help("Keep only the first N matches"),
                    ),
                )))
                .subcommand(draft_args(
                    Command::new("update")
                        .about("Overwrite a transaction by id")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Derived views over the ledger")
                .subcommand(json_flags(filter_args(
                    Command::new("summary")
                        .about("Net balance plus per-category and per-period totals")
                        .arg(
                            Arg::new("granularity")
                                .long("granularity")
                                .default_value("month")
                                .help("Period bucket: day|month|year"),
                        ),
                )))
                .subcommand(json_flags(filter_args(
                    Command::new("balance").about("Running balance per transaction"),
                )))
                .subcommand(json_flags(
                    Command::new("cashflow")
                        .about("Income vs expense per period")
                        .arg(
                            Arg::new("granularity")
                                .long("granularity")
                                .default_value("month")
                                .help("Period bucket: day|month|year"),
                        )
                        .arg(
                            Arg::new("periods")
                                .long("periods")
                                .value_parser(value_parser!(usize))
                                .default_value("12")
                                .help("Most recent periods to show"),
                        ),
                )),
        )
        .subcommand(
            Command::new("category")
                .about("Category labels in use")
                .subcommand(Command::new("list").about("List distinct categories"))
                .subcommand(
                    Command::new("rename")
                        .about("Relabel every transaction in a category")
                        .arg(Arg::new("old").required(true))
                        .arg(Arg::new("new").required(true)),
                ),
        )
        .subcommand(
            Command::new("export").about("Export ledger data").subcommand(
                Command::new("transactions")
                    .about("Write all transactions to a file")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv or json"),
                    )
                    .arg(Arg::new("out").long("out").required(true).help("Output path")),
            ),
        )
        .subcommand(
            Command::new("import").about("Import ledger data").subcommand(
                Command::new("transactions")
                    .about("Read transactions from a CSV file")
                    .arg(Arg::new("path").long("path").required(true).help("CSV path")),
            ),
        )
        .subcommand(Command::new("doctor").about("Scan stored rows for integrity issues"))
}
