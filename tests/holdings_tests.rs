// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use folioview::config::Settings;
use folioview::models::{Holding, holdings_from_assets};
use folioview::render::render_all;
use folioview::table::derive_view;
use folioview::{cli, commands::holdings, panels, seed};
use rust_decimal::Decimal;

fn rows_for(args: &[&str]) -> anyhow::Result<Vec<Holding>> {
    let records = holdings_from_assets(&seed::assets());
    let mut argv = vec!["folioview", "holdings", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("holdings", h_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = h_m.subcommand() {
            return holdings::query_rows(&Settings::default(), &records, list_m);
        }
    }
    panic!("no holdings list subcommand");
}

fn tickers(rows: &[Holding]) -> Vec<&str> {
    rows.iter().map(|h| h.ticker.as_str()).collect()
}

#[test]
fn default_sort_is_largest_value_first() {
    let rows = rows_for(&[]).unwrap();
    assert_eq!(
        tickers(&rows),
        vec!["USD", "TCS.NS", "BTC", "RELIANCE.NS", "HDFCBANK.NS", "ETH", "AAPL", "MSFT"]
    );
}

#[test]
fn category_filter_and_search() {
    let rows = rows_for(&["--category", "crypto"]).unwrap();
    assert_eq!(tickers(&rows), vec!["BTC", "ETH"]);

    let rows = rows_for(&["--search", "BANK"]).unwrap();
    assert_eq!(tickers(&rows), vec!["HDFCBANK.NS"]);
}

#[test]
fn clicks_walk_the_sort_cycle() {
    let asc = rows_for(&["--sort", "ticker"]).unwrap();
    assert_eq!(asc[0].ticker, "AAPL");
    let desc = rows_for(&["--sort", "ticker", "--clicks", "2"]).unwrap();
    assert_eq!(desc[0].ticker, "USD");
    let none = rows_for(&["--sort", "ticker", "--clicks", "3"]).unwrap();
    assert_eq!(none[0].ticker, "AAPL");
    assert_eq!(none[1].ticker, "MSFT");
}

#[test]
fn paging_and_bad_page_size() {
    let rows = rows_for(&["--page-size", "5", "--page", "2"]).unwrap();
    assert_eq!(tickers(&rows), vec!["ETH", "AAPL", "MSFT"]);
    assert!(rows_for(&["--page-size", "7"]).is_err());
    assert!(rows_for(&["--page", "0"]).is_err());
    assert!(rows_for(&["--category", "boats"]).is_err());
}

#[test]
fn huge_page_renders_an_empty_page() {
    let records = holdings_from_assets(&seed::assets());
    let page = usize::MAX.to_string();
    let matches =
        cli::build_cli().get_matches_from(["folioview", "holdings", "list", "--page", &page]);
    let Some(("holdings", h_m)) = matches.subcommand() else {
        panic!("no holdings subcommand");
    };
    let Some(("list", list_m)) = h_m.subcommand() else {
        panic!("no list subcommand");
    };
    let settings = Settings::default();
    let q = holdings::query(&settings, list_m).unwrap();
    let view = derive_view(&records, &q);
    assert!(view.rows.is_empty());
    assert_eq!(view.total_count, 8);

    let out = render_all(&panels::holdings(&view, "$", false));
    assert!(out.contains(&format!("0 of 8 holdings | page {} of 1", page)));
}

#[test]
fn allocation_and_profit_are_derived() {
    let records = holdings_from_assets(&seed::assets());
    let total: Decimal = records.iter().map(|h| h.allocation_pct).sum();
    assert_eq!(total.round_dp(6), Decimal::ONE_HUNDRED);

    let aapl = records.iter().find(|h| h.ticker == "AAPL").unwrap();
    assert_eq!(aapl.value, "1745.0".parse::<Decimal>().unwrap());
    assert_eq!(aapl.profit_loss, Decimal::from(245));
    assert_eq!(aapl.profit_loss_pct.round_dp(2), "16.33".parse::<Decimal>().unwrap());
}
