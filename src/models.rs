// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::QueryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Stock,
    Crypto,
    Cash,
    Bond,
    Commodity,
    RealEstate,
    Other,
}

impl AssetType {
    pub fn label(&self) -> &'static str {
        match self {
            AssetType::Stock => "Stocks",
            AssetType::Crypto => "Cryptocurrency",
            AssetType::Cash => "Cash",
            AssetType::Bond => "Bonds",
            AssetType::Commodity => "Commodities",
            AssetType::RealEstate => "Real Estate",
            AssetType::Other => "Other",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssetType::Stock => "stock",
            AssetType::Crypto => "crypto",
            AssetType::Cash => "cash",
            AssetType::Bond => "bond",
            AssetType::Commodity => "commodity",
            AssetType::RealEstate => "real_estate",
            AssetType::Other => "other",
        };
        f.write_str(s)
    }
}

impl FromStr for AssetType {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stock" | "stocks" => Ok(AssetType::Stock),
            "crypto" | "cryptocurrency" => Ok(AssetType::Crypto),
            "cash" => Ok(AssetType::Cash),
            "bond" | "bonds" => Ok(AssetType::Bond),
            "commodity" | "commodities" => Ok(AssetType::Commodity),
            "real_estate" | "real-estate" | "realestate" => Ok(AssetType::RealEstate),
            "other" => Ok(AssetType::Other),
            other => Err(QueryError::UnknownCategory {
                kind: "asset type",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeSide::Buy => f.write_str("Buy"),
            TradeSide::Sell => f.write_str("Sell"),
        }
    }
}

impl FromStr for TradeSide {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" => Ok(TradeSide::Buy),
            "sell" => Ok(TradeSide::Sell),
            other => Err(QueryError::UnknownCategory {
                kind: "transaction type",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Failed => "Failed",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    PriceTarget,
    Earning,
    Dividend,
    News,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlertKind::PriceTarget => "price_target",
            AlertKind::Earning => "earning",
            AlertKind::Dividend => "dividend",
            AlertKind::News => "news",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Active,
    Triggered,
    Expired,
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlertStatus::Active => "active",
            AlertStatus::Triggered => "triggered",
            AlertStatus::Expired => "expired",
        };
        f.write_str(s)
    }
}

impl FromStr for AlertStatus {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(AlertStatus::Active),
            "triggered" => Ok(AlertStatus::Triggered),
            "expired" => Ok(AlertStatus::Expired),
            other => Err(QueryError::UnknownCategory {
                kind: "alert status",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Alert,
    Update,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: i64,
    pub name: String,
    pub ticker: String,
    pub asset_type: AssetType,
    pub quantity: Decimal,
    pub avg_buy_price: Decimal,
    pub current_price: Decimal,
    pub sector: Option<String>,
}

/// A position as shown in the holdings table, derived from an [`Asset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub id: i64,
    pub asset: String,
    pub ticker: String,
    pub category: AssetType,
    pub quantity: Decimal,
    pub price: Decimal,
    pub value: Decimal,
    pub cost_basis: Decimal,
    pub allocation_pct: Decimal,
    pub profit_loss: Decimal,
    pub profit_loss_pct: Decimal,
}

impl Holding {
    pub fn from_asset(asset: &Asset, portfolio_value: Decimal) -> Self {
        let value = asset.quantity * asset.current_price;
        let cost_basis = asset.quantity * asset.avg_buy_price;
        let profit_loss = value - cost_basis;
        Holding {
            id: asset.id,
            asset: asset.name.clone(),
            ticker: asset.ticker.clone(),
            category: asset.asset_type,
            quantity: asset.quantity,
            price: asset.current_price,
            value,
            cost_basis,
            allocation_pct: percent_of(value, portfolio_value),
            profit_loss,
            profit_loss_pct: percent_of(profit_loss, cost_basis),
        }
    }
}

/// Derive the holdings table rows; allocation is relative to the whole portfolio.
pub fn holdings_from_assets(assets: &[Asset]) -> Vec<Holding> {
    let total: Decimal = assets
        .iter()
        .map(|a| a.quantity * a.current_price)
        .sum();
    assets
        .iter()
        .map(|a| Holding::from_asset(a, total))
        .collect()
}

/// `part / whole * 100`, or zero when `whole` is zero.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part / whole * Decimal::ONE_HUNDRED
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub side: TradeSide,
    pub asset: String,
    pub ticker: String,
    pub quantity: Decimal,
    pub price: Decimal,
    pub value: Decimal,
    pub status: TransactionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub kind: AlertKind,
    pub status: AlertStatus,
    pub asset: Option<String>,
    pub ticker: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub time: String,
    pub read: bool,
    pub kind: NotificationKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub date: NaiveDate,
    pub value: Decimal,
    pub change_pct: Decimal,
    pub benchmark: Decimal,
}
