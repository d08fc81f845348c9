// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn output_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    ]
}

/// Search, filter and sort flags shared by every table view.
fn query_args(
    category_flag: &'static str,
    category_help: &'static str,
    with_date: bool,
) -> Vec<Arg> {
    let mut args = vec![
        Arg::new("search")
            .long("search")
            .short('s')
            .help("Case-insensitive match on name or ticker"),
        Arg::new("category").long(category_flag).help(category_help),
        Arg::new("sort").long("sort").help("Column to sort by"),
        Arg::new("clicks")
            .long("clicks")
            .value_parser(value_parser!(u8))
            .requires("sort")
            .help("Header selections on the sort column: 1=asc, 2=desc, 3=unsorted"),
    ];
    if with_date {
        args.push(
            Arg::new("date")
                .long("date")
                .help("Only records on this day (YYYY-MM-DD)"),
        );
    }
    args
}

fn paging_args() -> [Arg; 2] {
    [
        Arg::new("page")
            .long("page")
            .value_parser(value_parser!(usize))
            .default_value("1"),
        Arg::new("page-size")
            .long("page-size")
            .value_parser(value_parser!(usize))
            .help("One of 5, 10, 20, 50"),
    ]
}

fn holdings_query() -> Vec<Arg> {
    query_args("category", "stock, crypto, cash, bond, commodity, real_estate, other", false)
}

fn transactions_query() -> Vec<Arg> {
    query_args("type", "buy or sell", true)
}

fn alerts_query() -> Vec<Arg> {
    query_args("status", "active, triggered or expired", true)
}

fn export_args() -> [Arg; 2] {
    [
        Arg::new("format")
            .long("format")
            .required(true)
            .help("csv or json"),
        Arg::new("out").long("out").required(true),
    ]
}

pub fn build_cli() -> Command {
    Command::new("folioview")
        .about("Portfolio dashboard in the terminal")
        .version(clap::crate_version!())
        .subcommand(
            Command::new("holdings")
                .about("Positions and their profit/loss")
                .subcommand(
                    Command::new("list")
                        .args(holdings_query())
                        .args(paging_args())
                        .args(output_args()),
                ),
        )
        .subcommand(
            Command::new("transactions")
                .about("Trade history")
                .subcommand(
                    Command::new("list")
                        .args(transactions_query())
                        .args(paging_args())
                        .args(output_args()),
                )
                .subcommand(
                    Command::new("add")
                        .about("Validate and confirm a new trade")
                        .arg(Arg::new("asset").long("asset"))
                        .arg(Arg::new("ticker").long("ticker"))
                        .arg(Arg::new("side").long("type").default_value("Buy"))
                        .arg(Arg::new("quantity").long("quantity"))
                        .arg(Arg::new("price").long("price"))
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("asset-type").long("asset-type").default_value("Stock"))
                        .arg(
                            Arg::new("json")
                                .long("json")
                                .action(ArgAction::SetTrue),
                        ),
                ),
        )
        .subcommand(
            Command::new("alerts")
                .about("Price targets, earnings, dividends and news")
                .subcommand(
                    Command::new("list")
                        .args(alerts_query())
                        .args(paging_args())
                        .args(output_args()),
                )
                .subcommand(
                    Command::new("dismiss").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("notifications")
                .subcommand(
                    Command::new("list")
                        .arg(
                            Arg::new("unread")
                                .long("unread")
                                .action(ArgAction::SetTrue),
                        )
                        .args(output_args()),
                )
                .subcommand(
                    Command::new("read").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                )
                .subcommand(Command::new("read-all")),
        )
        .subcommand(
            Command::new("performance")
                .about("Net worth over time")
                .arg(
                    Arg::new("timeframe")
                        .long("timeframe")
                        .short('t')
                        .help("1M, 3M, 6M, 1Y or ALL"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("overview")
                .about("Net worth, gains and allocation")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write the filtered, sorted table to a file")
                .subcommand(
                    Command::new("holdings")
                        .args(holdings_query())
                        .args(export_args()),
                )
                .subcommand(
                    Command::new("transactions")
                        .args(transactions_query())
                        .args(export_args()),
                ),
        )
        .subcommand(Command::new("dashboard").about("Interactive session on stdin"))
}
