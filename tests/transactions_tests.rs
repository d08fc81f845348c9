// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use folioview::config::Settings;
use folioview::models::Transaction;
use folioview::{cli, commands::transactions, seed};
use rust_decimal::Decimal;

fn list(args: &[&str]) -> anyhow::Result<Vec<Transaction>> {
    let mut argv = vec!["folioview", "transactions", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("transactions", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            return transactions::query_rows(&Settings::default(), &seed::transactions(), list_m);
        }
    }
    panic!("no transactions list subcommand");
}

#[test]
fn newest_first_by_default() {
    let rows = list(&[]).unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].date.to_string(), "2023-04-10");
    assert_eq!(rows[9].date.to_string(), "2023-02-10");
}

#[test]
fn type_and_date_filters() {
    let buys = list(&["--type", "buy"]).unwrap();
    assert_eq!(buys.len(), 7);
    assert_eq!(buys[0].ticker, "AAPL");

    let day = list(&["--date", "2023-03-28"]).unwrap();
    assert_eq!(day.len(), 1);
    assert_eq!(day[0].ticker, "TSLA");
    assert_eq!(day[0].value, "489.76".parse::<Decimal>().unwrap());
}

#[test]
fn value_ascending_second_page() {
    let rows = list(&["--sort", "value", "--page-size", "5", "--page", "2"]).unwrap();
    let tickers: Vec<&str> = rows.iter().map(|t| t.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["NVDA", "ETH", "TSLA", "ETH", "BTC"]);
}

#[test]
fn add_autofills_and_confirms() {
    let matches = cli::build_cli().get_matches_from([
        "folioview",
        "transactions",
        "add",
        "--asset",
        "Tesla Inc.",
        "--type",
        "Sell",
        "--quantity",
        "2",
        "--price",
        "244.88",
        "--date",
        "2023-03-28",
    ]);
    if let Some(("transactions", tx_m)) = matches.subcommand() {
        if let Some(("add", add_m)) = tx_m.subcommand() {
            let form = transactions::form_from_matches(add_m);
            assert_eq!(form.ticker, "TSLA");
            let tx = transactions::add(&Settings::default(), add_m).unwrap();
            assert_eq!(tx.value, "489.76".parse::<Decimal>().unwrap());
            assert_eq!(
                tx.confirmation("$").description,
                "Sell 2 TSLA at $245 each ($490 total)"
            );
        } else {
            panic!("no add subcommand");
        }
    } else {
        panic!("no transactions subcommand");
    }
}

#[test]
fn add_rejects_missing_fields() {
    let matches =
        cli::build_cli().get_matches_from(["folioview", "transactions", "add", "--asset", "Gold"]);
    if let Some(("transactions", tx_m)) = matches.subcommand() {
        if let Some(("add", add_m)) = tx_m.subcommand() {
            assert!(transactions::add(&Settings::default(), add_m).is_err());
        } else {
            panic!("no add subcommand");
        }
    } else {
        panic!("no transactions subcommand");
    }
}
