// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Widgets for each dashboard panel, shared by the one-shot commands and the
//! interactive session.

use rust_decimal::Decimal;

use crate::models::{Alert, Holding, Notification, Transaction};
use crate::performance::{Overview, PerformanceMetrics};
use crate::render::{Slice, StatCard, Widget};
use crate::table::DerivedView;
use crate::utils::{fmt_compact, fmt_currency, fmt_date, fmt_percent, fmt_quantity};

fn page_footer<T: crate::table::Record>(view: &DerivedView<'_, T>, noun: &str) -> String {
    let first = view
        .page
        .saturating_sub(1)
        .saturating_mul(view.page_size)
        .saturating_add(1)
        .min(view.total_count);
    let last = first.saturating_add(view.rows.len()).saturating_sub(1);
    let shown = if view.rows.is_empty() {
        format!("0 of {} {}", view.total_count, noun)
    } else {
        format!("{}-{} of {} {}", first, last, view.total_count, noun)
    };
    format!(
        "{} | page {} of {} ({} per page)",
        shown,
        view.page,
        view.total_pages.max(1),
        view.page_size
    )
}

fn signed_currency(d: &Decimal, symbol: &str) -> String {
    if *d > Decimal::ZERO {
        format!("+{}", fmt_currency(d, symbol))
    } else {
        fmt_currency(d, symbol)
    }
}

fn signed_percent(d: &Decimal) -> String {
    if *d > Decimal::ZERO {
        format!("+{}", fmt_percent(d))
    } else {
        fmt_percent(d)
    }
}

fn empty(noun: &str, filtered: bool) -> Widget {
    Widget::EmptyState {
        title: format!("No {} found", noun),
        hint: if filtered {
            "Try adjusting your search or filters.".to_string()
        } else {
            format!("There are no {} to show yet.", noun)
        },
    }
}

pub fn holdings(view: &DerivedView<'_, Holding>, symbol: &str, filtered: bool) -> Vec<Widget> {
    let s = &view.summary;
    let cards = Widget::StatCards(vec![
        StatCard::new("Total Value", fmt_currency(&s.total_value, symbol))
            .with_detail(format!("{} holdings", s.count)),
        StatCard::new("Total P/L", signed_currency(&s.total_profit_loss, symbol))
            .with_detail(signed_percent(&s.total_profit_loss_pct)),
        StatCard::new("Profitable", s.profitable_count.to_string())
            .with_detail(format!("{} unprofitable", s.unprofitable_count)),
        StatCard::new("Avg Return", signed_percent(&s.avg_return_pct)),
    ]);
    if view.is_empty() {
        return vec![cards, empty("holdings", filtered)];
    }
    let rows = view
        .rows
        .iter()
        .map(|h| {
            vec![
                h.asset.clone(),
                h.ticker.clone(),
                h.category.label().to_string(),
                fmt_quantity(&h.quantity),
                fmt_currency(&h.price, symbol),
                fmt_currency(&h.value, symbol),
                fmt_percent(&h.allocation_pct),
                signed_currency(&h.profit_loss, symbol),
                signed_percent(&h.profit_loss_pct),
            ]
        })
        .collect();
    vec![
        cards,
        Widget::table(
            &[
                "Asset",
                "Ticker",
                "Category",
                "Quantity",
                "Price",
                "Value",
                "Allocation",
                "P/L",
                "P/L %",
            ],
            rows,
            Some(page_footer(view, "holdings")),
        ),
    ]
}

pub fn transactions(
    view: &DerivedView<'_, Transaction>,
    symbol: &str,
    filtered: bool,
) -> Vec<Widget> {
    let s = &view.summary;
    let cards = Widget::StatCards(vec![
        StatCard::new("Total Transactions", s.count.to_string()),
        StatCard::new("Buy Volume", fmt_currency(&s.buy_value, symbol))
            .with_detail(format!("{} buys", s.buy_count)),
        StatCard::new("Sell Volume", fmt_currency(&s.sell_value, symbol))
            .with_detail(format!("{} sells", s.sell_count)),
        StatCard::new(s.net_label(), fmt_currency(&s.net_value.abs(), symbol))
            .with_detail(format!("{} trade difference", s.count_difference())),
    ]);
    if view.is_empty() {
        return vec![cards, empty("transactions", filtered)];
    }
    let rows = view
        .rows
        .iter()
        .map(|t| {
            vec![
                fmt_date(&t.date),
                t.side.to_string(),
                t.asset.clone(),
                t.ticker.clone(),
                fmt_quantity(&t.quantity),
                fmt_currency(&t.price, symbol),
                fmt_currency(&t.value, symbol),
                t.status.to_string(),
            ]
        })
        .collect();
    vec![
        cards,
        Widget::table(
            &["Date", "Type", "Asset", "Ticker", "Quantity", "Price", "Value", "Status"],
            rows,
            Some(page_footer(view, "transactions")),
        ),
    ]
}

pub fn alerts(view: &DerivedView<'_, Alert>, filtered: bool) -> Vec<Widget> {
    if view.is_empty() {
        return vec![empty("alerts", filtered)];
    }
    let rows = view
        .rows
        .iter()
        .map(|a| {
            vec![
                a.id.to_string(),
                fmt_date(&a.date),
                a.title.clone(),
                a.description.clone(),
                a.kind.to_string(),
                a.status.to_string(),
                a.ticker.clone().unwrap_or_default(),
            ]
        })
        .collect();
    let by_status = view
        .summary
        .by_status
        .iter()
        .map(|(status, n)| format!("{}: {}", status, n))
        .collect::<Vec<_>>()
        .join(", ");
    vec![Widget::table(
        &["ID", "Date", "Title", "Description", "Kind", "Status", "Ticker"],
        rows,
        Some(format!("{} | {}", page_footer(view, "alerts"), by_status)),
    )]
}

pub fn notifications(items: &[Notification]) -> Vec<Widget> {
    let unread = items.iter().filter(|n| !n.read).count();
    let banner = Widget::Banner {
        title: "Notifications".to_string(),
        message: format!("{} unread", unread),
    };
    if items.is_empty() {
        return vec![
            banner,
            Widget::EmptyState {
                title: "No notifications".to_string(),
                hint: "You're all caught up.".to_string(),
            },
        ];
    }
    let rows = items
        .iter()
        .map(|n| {
            vec![
                n.id.to_string(),
                if n.read { "" } else { "●" }.to_string(),
                n.title.clone(),
                n.description.clone(),
                n.time.clone(),
            ]
        })
        .collect();
    vec![banner, Widget::table(&["ID", "", "Title", "Description", "Time"], rows, None)]
}

pub fn performance(m: &PerformanceMetrics, symbol: &str) -> Vec<Widget> {
    let trend = if m.is_positive { "▲" } else { "▼" };
    vec![
        Widget::Banner {
            title: format!("Performance ({})", m.timeframe),
            message: format!(
                "{} to {} ({} points)",
                fmt_date(&m.start_date),
                fmt_date(&m.end_date),
                m.points
            ),
        },
        Widget::StatCards(vec![
            StatCard::new("Current Value", fmt_currency(&m.latest_value, symbol))
                .with_detail(format!("from {}", fmt_compact(&m.oldest_value, symbol))),
            StatCard::new("Change", format!("{} {}", trend, signed_percent(&m.change_pct)))
                .with_detail(signed_currency(&m.change, symbol)),
            StatCard::new("Benchmark", signed_percent(&m.benchmark_change_pct)),
        ]),
    ]
}

pub fn overview(o: &Overview, symbol: &str) -> Vec<Widget> {
    vec![
        Widget::StatCards(vec![
            StatCard::new("Net Worth", fmt_currency(&o.net_worth, symbol))
                .with_detail(format!("{} invested", fmt_compact(&o.total_cost, symbol))),
            StatCard::new("Total Gain", signed_currency(&o.total_gain, symbol))
                .with_detail(signed_percent(&o.total_gain_pct)),
            StatCard::new("Daily Change", signed_currency(&o.daily_change, symbol))
                .with_detail(signed_percent(&o.daily_change_pct)),
        ]),
        Widget::Allocation(
            o.allocation
                .iter()
                .map(|a| Slice {
                    label: a.category.label().to_string(),
                    pct: a.pct,
                })
                .collect(),
        ),
    ]
}
