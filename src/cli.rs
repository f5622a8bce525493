// Copyright (c) Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print as pretty JSON")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print as JSON lines")
            .action(ArgAction::SetTrue),
    )
}

pub fn build_cli() -> Command {
    Command::new("pocketbook")
        .version(crate_version!())
        .about("Personal income/expense tracking, monthly budgets, and spending reports")
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("seed")
                .about("Load sample categories, six months of transactions, and budgets"),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .about("Add a category")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("color").long("color").default_value("gray"))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .value_parser(["income", "expense"])
                                .required(true),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List categories"),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a category by id")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD").required(true))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .value_parser(["income", "expense"])
                                .required(true),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Category id")
                                .required(true),
                        )
                        .arg(Arg::new("id").long("id").help("Explicit id (generated if omitted)")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("month").long("month").help("Filter by YYYY-MM"))
                        .arg(Arg::new("category").long("category").help("Filter by category id"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a transaction by id")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Manage monthly budgets")
                .subcommand(
                    Command::new("set")
                        .about("Set a category's budget for a month")
                        .arg(Arg::new("month").long("month").help("YYYY-MM").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Category id")
                                .required(true),
                        )
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List budgets")
                        .arg(Arg::new("month").long("month").help("Filter by YYYY-MM")),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Spending reports")
                .subcommand(json_flags(
                    Command::new("spending").about("Expense totals by category, largest first"),
                ))
                .subcommand(json_flags(
                    Command::new("trend")
                        .about("Monthly income/expense totals over a trailing window")
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .value_parser(value_parser!(usize))
                                .default_value("6"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("budget")
                        .about("Budget vs actual for one month")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .help("YYYY-MM (defaults to the current month)"),
                        ),
                )),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .about("Export all transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .help("csv or json")
                            .required(true),
                    )
                    .arg(Arg::new("out").long("out").help("Output path").required(true)),
            ),
        )
}
