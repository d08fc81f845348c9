// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Net-worth series slicing and the headline portfolio figures.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::models::{AssetType, Holding, PerformancePoint, percent_of};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "ALL")]
    All,
}

impl Timeframe {
    /// Trailing number of daily points, `None` for the whole series.
    pub fn days(&self) -> Option<usize> {
        match self {
            Timeframe::OneMonth => Some(30),
            Timeframe::ThreeMonths => Some(90),
            Timeframe::SixMonths => Some(180),
            Timeframe::OneYear => Some(365),
            Timeframe::All => None,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Timeframe::OneMonth => "1M",
            Timeframe::ThreeMonths => "3M",
            Timeframe::SixMonths => "6M",
            Timeframe::OneYear => "1Y",
            Timeframe::All => "ALL",
        };
        f.write_str(s)
    }
}

impl FromStr for Timeframe {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "1M" => Ok(Timeframe::OneMonth),
            "3M" => Ok(Timeframe::ThreeMonths),
            "6M" => Ok(Timeframe::SixMonths),
            "1Y" => Ok(Timeframe::OneYear),
            "ALL" => Ok(Timeframe::All),
            _ => Err(QueryError::UnknownCategory {
                kind: "timeframe",
                value: s.to_string(),
            }),
        }
    }
}

pub fn slice(points: &[PerformancePoint], timeframe: Timeframe) -> &[PerformancePoint] {
    match timeframe.days() {
        Some(n) if n < points.len() => &points[points.len() - n..],
        _ => points,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceMetrics {
    pub timeframe: Timeframe,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub oldest_value: Decimal,
    pub latest_value: Decimal,
    pub change: Decimal,
    pub change_pct: Decimal,
    pub benchmark_change_pct: Decimal,
    pub is_positive: bool,
    pub points: usize,
}

/// Figures for the chosen window; `None` on an empty series.
pub fn metrics(points: &[PerformancePoint], timeframe: Timeframe) -> Option<PerformanceMetrics> {
    let window = slice(points, timeframe);
    let first = window.first()?;
    let last = window.last()?;
    let change = last.value - first.value;
    let change_pct = percent_of(change, first.value);
    Some(PerformanceMetrics {
        timeframe,
        start_date: first.date,
        end_date: last.date,
        oldest_value: first.value,
        latest_value: last.value,
        change,
        change_pct,
        benchmark_change_pct: percent_of(last.benchmark - first.benchmark, first.benchmark),
        is_positive: change_pct >= Decimal::ZERO,
        points: window.len(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationSlice {
    pub category: AssetType,
    pub value: Decimal,
    pub pct: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub net_worth: Decimal,
    pub total_cost: Decimal,
    pub total_gain: Decimal,
    pub total_gain_pct: Decimal,
    pub daily_change: Decimal,
    pub daily_change_pct: Decimal,
    pub allocation: Vec<AllocationSlice>,
}

pub fn overview(holdings: &[Holding], series: &[PerformancePoint]) -> Overview {
    let net_worth: Decimal = holdings.iter().map(|h| h.value).sum();
    let total_cost: Decimal = holdings.iter().map(|h| h.cost_basis).sum();
    let total_gain = net_worth - total_cost;

    let (daily_change, daily_change_pct) = match series {
        [.., prev, last] => {
            let change = last.value - prev.value;
            (change, percent_of(change, prev.value))
        }
        _ => (Decimal::ZERO, Decimal::ZERO),
    };

    let mut by_category: BTreeMap<AssetType, Decimal> = BTreeMap::new();
    for h in holdings {
        *by_category.entry(h.category).or_insert(Decimal::ZERO) += h.value;
    }
    let mut allocation: Vec<AllocationSlice> = by_category
        .into_iter()
        .map(|(category, value)| AllocationSlice {
            category,
            value,
            pct: percent_of(value, net_worth),
        })
        .collect();
    allocation.sort_by(|a, b| b.value.cmp(&a.value));

    Overview {
        net_worth,
        total_cost,
        total_gain,
        total_gain_pct: percent_of(total_gain, total_cost),
        daily_change,
        daily_change_pct,
        allocation,
    }
}
