// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Cursor;

use folioview::commands::dashboard::run;
use folioview::config::Settings;
use folioview::dashboard::{Command, DashboardState, Panel, unread_count};
use folioview::error::CommandError;
use folioview::models::TradeSide;
use folioview::performance::Timeframe;
use folioview::table::{SortState, TransactionColumn};

fn session(script: &str) -> (DashboardState, String) {
    let mut out: Vec<u8> = Vec::new();
    let state = run(&Settings::default(), Cursor::new(script.to_string()), &mut out).unwrap();
    (state, String::from_utf8(out).unwrap())
}

#[test]
fn session_applies_commands_in_order() {
    let (state, output) = session(
        "view transactions\nfilter buy\nsort value\nnext\ndismiss 1\nread-all\nquit\nview alerts\n",
    );
    assert_eq!(state.panel, Panel::Transactions);
    assert_eq!(state.transactions_query.category, Some(TradeSide::Buy));
    assert_eq!(
        state.transactions_query.sort,
        SortState::ascending(TransactionColumn::Value)
    );
    assert_eq!(state.transactions_query.page, 1);
    assert_eq!(state.alerts.len(), 4);
    assert_eq!(unread_count(&state.notifications), 0);
    assert!(output.contains("Alert dismissed"));
}

#[test]
fn rejected_commands_leave_state_untouched() {
    let (state, output) = session("view nowhere\nsize 7\nview holdings\ndate 2023-04-10\n");
    assert_eq!(state.panel, Panel::Holdings);
    assert_eq!(state.holdings_query.page_size, 10);
    assert_eq!(state.holdings_query.date, None);
    assert_eq!(output.matches("error:").count(), 3);
}

#[test]
fn next_stops_at_last_page() {
    let state = DashboardState::new(&Settings::default()).unwrap();
    let (state, _) = state.apply(Command::View(Panel::Transactions)).unwrap();
    let (state, _) = state.apply(Command::Size(5)).unwrap();
    let (state, _) = state.apply(Command::Next).unwrap();
    assert_eq!(state.transactions_query.page, 2);
    let (state, _) = state.apply(Command::Next).unwrap();
    assert_eq!(state.transactions_query.page, 2);
    let (state, _) = state.apply(Command::Prev).unwrap();
    let (state, _) = state.apply(Command::Prev).unwrap();
    assert_eq!(state.transactions_query.page, 1);
}

#[test]
fn performance_panel_filters_by_timeframe() {
    let state = DashboardState::new(&Settings::default()).unwrap();
    assert_eq!(state.timeframe, Timeframe::OneYear);
    let (state, _) = state.apply(Command::View(Panel::Performance)).unwrap();
    let (state, _) = state.apply(Command::Filter(Some("3m".into()))).unwrap();
    assert_eq!(state.timeframe, Timeframe::ThreeMonths);
    assert!(matches!(
        state.apply(Command::Sort("value".into())),
        Err(CommandError::NotApplicable { .. })
    ));
}

#[test]
fn dismissing_unknown_alert_fails() {
    let state = DashboardState::new(&Settings::default()).unwrap();
    assert_eq!(
        state.apply(Command::Dismiss(42)).unwrap_err(),
        CommandError::NotFound {
            kind: "alert",
            id: 42
        }
    );
}
