// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Built-in sample data standing in for a portfolio data source.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{
    Alert, AlertKind, AlertStatus, Asset, AssetType, Notification, NotificationKind,
    PerformancePoint, TradeSide, Transaction, TransactionStatus,
};

fn d(num: i64, scale: u32) -> Decimal {
    Decimal::new(num, scale)
}

fn day(y: i32, m: u32, dd: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, dd).unwrap_or_default()
}

/// Known asset names and their tickers, used to auto-fill the add form.
pub const ASSET_SUGGESTIONS: &[(&str, &str)] = &[
    ("Apple Inc.", "AAPL"),
    ("Microsoft Corporation", "MSFT"),
    ("Amazon.com Inc.", "AMZN"),
    ("Tesla Inc.", "TSLA"),
    ("NVIDIA Corporation", "NVDA"),
    ("Bitcoin", "BTC"),
    ("Ethereum", "ETH"),
];

pub fn assets() -> Vec<Asset> {
    let asset = |id, name: &str, ticker: &str, kind, qty, avg, cur, sector: Option<&str>| Asset {
        id,
        name: name.to_string(),
        ticker: ticker.to_string(),
        asset_type: kind,
        quantity: qty,
        avg_buy_price: avg,
        current_price: cur,
        sector: sector.map(str::to_string),
    };
    vec![
        asset(
            1,
            "Apple Inc.",
            "AAPL",
            AssetType::Stock,
            d(10, 0),
            d(150, 0),
            d(1745, 1),
            Some("Technology"),
        ),
        asset(
            2,
            "Microsoft Corporation",
            "MSFT",
            AssetType::Stock,
            d(5, 0),
            d(265, 0),
            d(30575, 2),
            Some("Technology"),
        ),
        asset(3, "Bitcoin", "BTC", AssetType::Crypto, d(5, 1), d(40000, 0), d(44500, 0), None),
        asset(4, "Ethereum", "ETH", AssetType::Crypto, d(2, 0), d(2500, 0), d(2300, 0), None),
        asset(
            5,
            "Tata Consultancy Services",
            "TCS.NS",
            AssetType::Stock,
            d(15, 0),
            d(3200, 0),
            d(3450, 0),
            Some("Technology"),
        ),
        asset(
            6,
            "Reliance Industries",
            "RELIANCE.NS",
            AssetType::Stock,
            d(8, 0),
            d(2100, 0),
            d(2350, 0),
            Some("Energy"),
        ),
        asset(
            7,
            "HDFC Bank",
            "HDFCBANK.NS",
            AssetType::Stock,
            d(12, 0),
            d(1450, 0),
            d(1380, 0),
            Some("Financial Services"),
        ),
        asset(8, "Cash", "USD", AssetType::Cash, d(100000, 0), d(1, 0), d(1, 0), None),
    ]
}

pub fn transactions() -> Vec<Transaction> {
    let tx = |id, date, side, asset: &str, ticker: &str, qty, price, value| Transaction {
        id,
        date,
        side,
        asset: asset.to_string(),
        ticker: ticker.to_string(),
        quantity: qty,
        price,
        value,
        status: TransactionStatus::Completed,
    };
    vec![
        tx(
            1,
            day(2023, 4, 10),
            TradeSide::Buy,
            "Apple Inc.",
            "AAPL",
            d(5, 0),
            d(150, 0),
            d(750, 0),
        ),
        tx(
            2,
            day(2023, 4, 5),
            TradeSide::Buy,
            "Microsoft Corporation",
            "MSFT",
            d(3, 0),
            d(265, 0),
            d(795, 0),
        ),
        tx(
            3,
            day(2023, 3, 28),
            TradeSide::Sell,
            "Tesla Inc.",
            "TSLA",
            d(2, 0),
            d(24488, 2),
            d(48976, 2),
        ),
        tx(
            4,
            day(2023, 3, 15),
            TradeSide::Buy,
            "Bitcoin",
            "BTC",
            d(25, 2),
            d(40000, 0),
            d(10000, 0),
        ),
        tx(
            5,
            day(2023, 3, 10),
            TradeSide::Buy,
            "NVIDIA Corporation",
            "NVDA",
            d(8, 0),
            d(180, 0),
            d(1440, 0),
        ),
        tx(
            6,
            day(2023, 3, 5),
            TradeSide::Sell,
            "Amazon.com Inc.",
            "AMZN",
            d(4, 0),
            d(135, 0),
            d(540, 0),
        ),
        tx(7, day(2023, 2, 28), TradeSide::Buy, "Ethereum", "ETH", d(2, 0), d(2500, 0), d(5000, 0)),
        tx(
            8,
            day(2023, 2, 20),
            TradeSide::Buy,
            "Apple Inc.",
            "AAPL",
            d(5, 0),
            d(145, 0),
            d(725, 0),
        ),
        tx(
            9,
            day(2023, 2, 15),
            TradeSide::Sell,
            "Ethereum",
            "ETH",
            d(1, 0),
            d(2400, 0),
            d(2400, 0),
        ),
        tx(
            10,
            day(2023, 2, 10),
            TradeSide::Buy,
            "Tesla Inc.",
            "TSLA",
            d(14, 0),
            d(220, 0),
            d(3080, 0),
        ),
    ]
}

pub fn alerts() -> Vec<Alert> {
    let alert = |id, title: &str, desc: &str, date, kind, status, on: Option<(&str, &str)>| Alert {
        id,
        title: title.to_string(),
        description: desc.to_string(),
        date,
        kind,
        status,
        asset: on.map(|(asset, _)| asset.to_string()),
        ticker: on.map(|(_, ticker)| ticker.to_string()),
    };
    vec![
        alert(
            1,
            "Price Target Reached",
            "Apple Inc. has reached your target price of $175.",
            day(2023, 4, 10),
            AlertKind::PriceTarget,
            AlertStatus::Triggered,
            Some(("Apple Inc.", "AAPL")),
        ),
        alert(
            2,
            "Upcoming Earnings",
            "Microsoft reports quarterly earnings on April 25.",
            day(2023, 4, 20),
            AlertKind::Earning,
            AlertStatus::Active,
            Some(("Microsoft Corporation", "MSFT")),
        ),
        alert(
            3,
            "Dividend Payment",
            "HDFC Bank dividend of $15 per share to be paid on May 5.",
            day(2023, 5, 1),
            AlertKind::Dividend,
            AlertStatus::Active,
            Some(("HDFC Bank", "HDFCBANK.NS")),
        ),
        alert(
            4,
            "Price Target",
            "Bitcoin approaching your target price of $45,000.",
            day(2023, 4, 15),
            AlertKind::PriceTarget,
            AlertStatus::Active,
            Some(("Bitcoin", "BTC")),
        ),
        alert(
            5,
            "Market News",
            "Stock market closed on upcoming national holiday.",
            day(2023, 4, 18),
            AlertKind::News,
            AlertStatus::Active,
            None,
        ),
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            title: "Price Alert".into(),
            description: "AAPL has reached your target price of $180".into(),
            time: "10 mins ago".into(),
            read: false,
            kind: NotificationKind::Alert,
        },
        Notification {
            id: 2,
            title: "Dividend Payment".into(),
            description: "You received a dividend payment of $125.50".into(),
            time: "2 hours ago".into(),
            read: false,
            kind: NotificationKind::Update,
        },
        Notification {
            id: 3,
            title: "Market Update".into(),
            description: "Market closed with S&P 500 up 1.2%".into(),
            time: "Yesterday".into(),
            read: true,
            kind: NotificationKind::System,
        },
    ]
}

// Daily portfolio moves in basis points, replayed in a loop.
const DAILY_MOVES_BPS: [i64; 12] = [35, -12, 8, -20, 41, 3, -7, 15, -25, 22, 9, -4];
const BENCHMARK_BPS: i64 = 4;

/// Deterministic daily net-worth series of `days` points ending on `end`.
pub fn performance_series(end: NaiveDate, days: usize) -> Vec<PerformancePoint> {
    let ten_thousand = Decimal::from(10_000);
    let mut value = d(1_100_000, 0);
    let mut benchmark = value;
    let start = end - Duration::days(days.saturating_sub(1) as i64);
    let mut out = Vec::with_capacity(days);
    for i in 0..days {
        let bps = if i == 0 {
            0
        } else {
            DAILY_MOVES_BPS[i % DAILY_MOVES_BPS.len()]
        };
        value = (value * (ten_thousand + Decimal::from(bps)) / ten_thousand).round_dp(2);
        if i > 0 {
            let step = ten_thousand + Decimal::from(BENCHMARK_BPS);
            benchmark = (benchmark * step / ten_thousand).round_dp(2);
        }
        out.push(PerformancePoint {
            date: start + Duration::days(i as i64),
            value,
            change_pct: Decimal::new(bps, 2),
            benchmark,
        });
    }
    out
}

/// The series the dashboard ships with: three years up to the last seeded trade month.
pub fn default_performance() -> Vec<PerformancePoint> {
    performance_series(day(2023, 4, 30), 1095)
}
