// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use folioview::models::{TradeSide, Transaction, TransactionStatus};
use folioview::table::{
    QueryAction, QueryState, SortDirection, SortState, TransactionColumn, derive_view,
    filter_sorted,
};
use rust_decimal::Decimal;

fn tx(id: i64, day: u32, side: TradeSide, ticker: &str, value: &str) -> Transaction {
    let value: Decimal = value.parse().unwrap();
    Transaction {
        id,
        date: NaiveDate::from_ymd_opt(2023, 4, day).unwrap(),
        side,
        asset: format!("{} asset", ticker),
        ticker: ticker.to_string(),
        quantity: Decimal::ONE,
        price: value,
        value,
        status: TransactionStatus::Completed,
    }
}

fn sample() -> Vec<Transaction> {
    vec![
        tx(1, 10, TradeSide::Buy, "AAPL", "750"),
        tx(2, 5, TradeSide::Buy, "MSFT", "795"),
        tx(3, 1, TradeSide::Sell, "TSLA", "490"),
    ]
}

fn unsorted() -> QueryState<TransactionColumn, TradeSide> {
    QueryState::new(SortState {
        column: TransactionColumn::Date,
        direction: SortDirection::Unsorted,
    })
}

fn tickers(rows: &[&Transaction]) -> Vec<String> {
    rows.iter().map(|t| t.ticker.clone()).collect()
}

#[test]
fn buy_filter_keeps_buys_and_totals_them() {
    let records = sample();
    let q = unsorted()
        .reduce(QueryAction::FilterCategory(Some(TradeSide::Buy)))
        .unwrap();
    let view = derive_view(&records, &q);
    assert_eq!(tickers(&view.rows), vec!["AAPL", "MSFT"]);
    assert_eq!(view.total_count, 2);
    assert_eq!(view.summary.buy_value, Decimal::from(1545));
    assert_eq!(view.summary.sell_count, 0);
    assert_eq!(view.summary.net_label(), "Net Buy");
}

#[test]
fn value_ascending_orders_low_to_high() {
    let records = sample();
    let q = unsorted()
        .reduce(QueryAction::SortBy(TransactionColumn::Value))
        .unwrap();
    assert_eq!(q.sort, SortState::ascending(TransactionColumn::Value));
    let view = derive_view(&records, &q);
    assert_eq!(tickers(&view.rows), vec!["TSLA", "AAPL", "MSFT"]);
}

#[test]
fn second_page_of_one_is_second_most_recent() {
    let records = sample();
    let q = QueryState {
        page: 2,
        page_size: 1,
        ..QueryState::<TransactionColumn, TradeSide>::new(SortState::descending(
            TransactionColumn::Date,
        ))
    };
    let view = derive_view(&records, &q);
    assert_eq!(tickers(&view.rows), vec!["MSFT"]);
    assert_eq!(view.total_pages, 3);
    assert!(view.has_next_page());
}

#[test]
fn totals_cover_filtered_set_not_page() {
    let records: Vec<Transaction> = (1..=23)
        .map(|d| {
            let side = if d % 3 == 0 { TradeSide::Sell } else { TradeSide::Buy };
            tx(d as i64, d, side, &format!("T{}", d), "10")
        })
        .collect();
    let base = unsorted().with_page_size(5).unwrap();
    let expected = records.iter().filter(|t| t.side == TradeSide::Buy).count();
    for page in 1..=5 {
        let q = base
            .clone()
            .reduce(QueryAction::FilterCategory(Some(TradeSide::Buy)))
            .unwrap()
            .reduce(QueryAction::GoToPage(page))
            .unwrap();
        let view = derive_view(&records, &q);
        assert_eq!(view.total_count, expected);
        assert_eq!(view.summary.buy_value, Decimal::from(10 * expected as i64));
    }
}

#[test]
fn pages_concatenate_to_full_sequence() {
    let records: Vec<Transaction> = (1..=17)
        .map(|d| tx(d as i64, d, TradeSide::Buy, &format!("T{:02}", (d * 7) % 17), "1"))
        .collect();
    let q = unsorted()
        .reduce(QueryAction::SortBy(TransactionColumn::Ticker))
        .unwrap()
        .with_page_size(5)
        .unwrap();
    let all = filter_sorted(&records, &q);
    let first = derive_view(&records, &q);
    let mut joined: Vec<&Transaction> = Vec::new();
    for page in 1..=first.total_pages {
        let q = q.clone().reduce(QueryAction::GoToPage(page)).unwrap();
        joined.extend(derive_view(&records, &q).rows);
    }
    assert_eq!(first.total_pages, 4);
    assert_eq!(joined, all);

    let mut sorted_ids: Vec<i64> = all.iter().map(|t| t.id).collect();
    sorted_ids.sort();
    assert_eq!(sorted_ids, (1..=17).collect::<Vec<i64>>());
}

#[test]
fn three_clicks_restore_input_order_and_fourth_ascends() {
    let records = sample();
    let mut q = unsorted();
    let mut orders = Vec::new();
    for _ in 0..4 {
        q = q.reduce(QueryAction::SortBy(TransactionColumn::Value)).unwrap();
        orders.push(tickers(&derive_view(&records, &q).rows));
    }
    assert_eq!(orders[0], vec!["TSLA", "AAPL", "MSFT"]);
    assert_eq!(orders[1], vec!["MSFT", "AAPL", "TSLA"]);
    assert_eq!(orders[2], vec!["AAPL", "MSFT", "TSLA"]);
    assert_eq!(orders[3], orders[0]);
}

#[test]
fn switching_column_starts_ascending() {
    let q = unsorted()
        .reduce(QueryAction::SortBy(TransactionColumn::Value))
        .unwrap()
        .reduce(QueryAction::SortBy(TransactionColumn::Value))
        .unwrap()
        .reduce(QueryAction::SortBy(TransactionColumn::Ticker))
        .unwrap();
    assert_eq!(q.sort, SortState::ascending(TransactionColumn::Ticker));
}

#[test]
fn same_query_twice_is_identical() {
    let records = sample();
    let q = unsorted()
        .reduce(QueryAction::Search("a".into()))
        .unwrap()
        .reduce(QueryAction::SortBy(TransactionColumn::Date))
        .unwrap();
    let a = derive_view(&records, &q);
    let b = derive_view(&records, &q);
    assert_eq!(a.rows, b.rows);
    assert_eq!(a.summary, b.summary);
}

#[test]
fn search_is_case_insensitive_over_name_and_ticker() {
    let records = sample();
    let q = unsorted().reduce(QueryAction::Search("msft".into())).unwrap();
    assert_eq!(tickers(&derive_view(&records, &q).rows), vec!["MSFT"]);
    let q = unsorted().reduce(QueryAction::Search("TSLA ASS".into())).unwrap();
    assert_eq!(tickers(&derive_view(&records, &q).rows), vec!["TSLA"]);
}

#[test]
fn date_filter_matches_calendar_day() {
    let records = sample();
    let day = NaiveDate::from_ymd_opt(2023, 4, 5).unwrap();
    let q = unsorted().reduce(QueryAction::FilterDate(Some(day))).unwrap();
    let view = derive_view(&records, &q);
    assert_eq!(tickers(&view.rows), vec!["MSFT"]);
}

#[test]
fn page_past_end_is_empty_but_keeps_totals() {
    let records = sample();
    let q = unsorted().reduce(QueryAction::GoToPage(9)).unwrap();
    let view = derive_view(&records, &q);
    assert!(view.rows.is_empty());
    assert!(!view.is_empty());
    assert_eq!(view.total_count, 3);
    assert_eq!(view.total_pages, 1);
}

#[test]
fn no_match_signals_empty_state() {
    let records = sample();
    let q = unsorted().reduce(QueryAction::Search("zzz".into())).unwrap();
    let view = derive_view(&records, &q);
    assert!(view.is_empty());
    assert_eq!(view.total_pages, 0);
    assert_eq!(view.summary.count, 0);
}

#[test]
fn equal_keys_keep_input_order() {
    let records = vec![
        tx(1, 1, TradeSide::Buy, "B", "5"),
        tx(2, 2, TradeSide::Buy, "A", "5"),
        tx(3, 3, TradeSide::Buy, "C", "1"),
    ];
    let asc = unsorted()
        .reduce(QueryAction::SortBy(TransactionColumn::Value))
        .unwrap();
    assert_eq!(tickers(&filter_sorted(&records, &asc)), vec!["C", "B", "A"]);
    let desc = asc.reduce(QueryAction::SortBy(TransactionColumn::Value)).unwrap();
    assert_eq!(tickers(&filter_sorted(&records, &desc)), vec!["B", "A", "C"]);
}
