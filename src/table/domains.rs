// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{FieldValue, Record};
use crate::error::QueryError;
use crate::models::{
    Alert, AlertKind, AlertStatus, AssetType, Holding, TradeSide, Transaction, TransactionStatus,
    percent_of,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoldingColumn {
    Asset,
    Ticker,
    Category,
    Quantity,
    Price,
    Value,
    Allocation,
    ProfitLoss,
    ProfitLossPct,
}

impl FromStr for HoldingColumn {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "asset" | "name" => Ok(HoldingColumn::Asset),
            "ticker" => Ok(HoldingColumn::Ticker),
            "category" | "type" => Ok(HoldingColumn::Category),
            "quantity" | "qty" => Ok(HoldingColumn::Quantity),
            "price" => Ok(HoldingColumn::Price),
            "value" => Ok(HoldingColumn::Value),
            "allocation" => Ok(HoldingColumn::Allocation),
            "profit_loss" | "profitloss" | "pl" => Ok(HoldingColumn::ProfitLoss),
            "profit_loss_pct" | "pl_pct" | "return" => Ok(HoldingColumn::ProfitLossPct),
            _ => Err(QueryError::UnknownColumn(s.to_string())),
        }
    }
}

impl fmt::Display for HoldingColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HoldingColumn::Asset => "asset",
            HoldingColumn::Ticker => "ticker",
            HoldingColumn::Category => "category",
            HoldingColumn::Quantity => "quantity",
            HoldingColumn::Price => "price",
            HoldingColumn::Value => "value",
            HoldingColumn::Allocation => "allocation",
            HoldingColumn::ProfitLoss => "profit_loss",
            HoldingColumn::ProfitLossPct => "profit_loss_pct",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingsSummary {
    pub count: usize,
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub total_profit_loss: Decimal,
    pub total_profit_loss_pct: Decimal,
    pub profitable_count: usize,
    pub unprofitable_count: usize,
    pub avg_return_pct: Decimal,
    pub by_category: BTreeMap<AssetType, usize>,
}

impl Record for Holding {
    type Column = HoldingColumn;
    type Category = AssetType;
    type Summary = HoldingsSummary;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.asset.as_str(), self.ticker.as_str()]
    }

    fn category(&self) -> AssetType {
        self.category
    }

    fn field(&self, column: HoldingColumn) -> FieldValue<'_> {
        match column {
            HoldingColumn::Asset => FieldValue::Text(&self.asset),
            HoldingColumn::Ticker => FieldValue::Text(&self.ticker),
            HoldingColumn::Category => FieldValue::Text(self.category.label()),
            HoldingColumn::Quantity => FieldValue::Number(self.quantity),
            HoldingColumn::Price => FieldValue::Number(self.price),
            HoldingColumn::Value => FieldValue::Number(self.value),
            HoldingColumn::Allocation => FieldValue::Number(self.allocation_pct),
            HoldingColumn::ProfitLoss => FieldValue::Number(self.profit_loss),
            HoldingColumn::ProfitLossPct => FieldValue::Number(self.profit_loss_pct),
        }
    }

    fn summarize(rows: &[&Self]) -> HoldingsSummary {
        let mut summary = HoldingsSummary {
            count: rows.len(),
            total_value: Decimal::ZERO,
            total_cost: Decimal::ZERO,
            total_profit_loss: Decimal::ZERO,
            total_profit_loss_pct: Decimal::ZERO,
            profitable_count: 0,
            unprofitable_count: 0,
            avg_return_pct: Decimal::ZERO,
            by_category: BTreeMap::new(),
        };
        let mut return_sum = Decimal::ZERO;
        for h in rows {
            summary.total_value += h.value;
            summary.total_cost += h.cost_basis;
            summary.total_profit_loss += h.profit_loss;
            return_sum += h.profit_loss_pct;
            if h.profit_loss > Decimal::ZERO {
                summary.profitable_count += 1;
            } else if h.profit_loss < Decimal::ZERO {
                summary.unprofitable_count += 1;
            }
            *summary.by_category.entry(h.category).or_insert(0) += 1;
        }
        summary.total_profit_loss_pct = percent_of(summary.total_profit_loss, summary.total_cost);
        if !rows.is_empty() {
            summary.avg_return_pct = return_sum / Decimal::from(rows.len());
        }
        summary
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionColumn {
    Date,
    Type,
    Asset,
    Ticker,
    Quantity,
    Price,
    Value,
    Status,
}

impl FromStr for TransactionColumn {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(TransactionColumn::Date),
            "type" | "side" => Ok(TransactionColumn::Type),
            "asset" | "description" => Ok(TransactionColumn::Asset),
            "ticker" => Ok(TransactionColumn::Ticker),
            "quantity" | "qty" => Ok(TransactionColumn::Quantity),
            "price" => Ok(TransactionColumn::Price),
            "value" | "amount" => Ok(TransactionColumn::Value),
            "status" => Ok(TransactionColumn::Status),
            _ => Err(QueryError::UnknownColumn(s.to_string())),
        }
    }
}

impl fmt::Display for TransactionColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransactionColumn::Date => "date",
            TransactionColumn::Type => "type",
            TransactionColumn::Asset => "asset",
            TransactionColumn::Ticker => "ticker",
            TransactionColumn::Quantity => "quantity",
            TransactionColumn::Price => "price",
            TransactionColumn::Value => "value",
            TransactionColumn::Status => "status",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionSummary {
    pub count: usize,
    pub buy_count: usize,
    pub sell_count: usize,
    pub buy_value: Decimal,
    pub sell_value: Decimal,
    pub net_value: Decimal,
}

impl TransactionSummary {
    pub fn net_label(&self) -> &'static str {
        if self.net_value > Decimal::ZERO {
            "Net Buy"
        } else {
            "Net Sell"
        }
    }

    pub fn count_difference(&self) -> usize {
        self.buy_count.abs_diff(self.sell_count)
    }
}

impl Record for Transaction {
    type Column = TransactionColumn;
    type Category = TradeSide;
    type Summary = TransactionSummary;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.asset.as_str(), self.ticker.as_str()]
    }

    fn category(&self) -> TradeSide {
        self.side
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn field(&self, column: TransactionColumn) -> FieldValue<'_> {
        match column {
            TransactionColumn::Date => FieldValue::Date(self.date),
            TransactionColumn::Type => FieldValue::Text(match self.side {
                TradeSide::Buy => "Buy",
                TradeSide::Sell => "Sell",
            }),
            TransactionColumn::Asset => FieldValue::Text(&self.asset),
            TransactionColumn::Ticker => FieldValue::Text(&self.ticker),
            TransactionColumn::Quantity => FieldValue::Number(self.quantity),
            TransactionColumn::Price => FieldValue::Number(self.price),
            TransactionColumn::Value => FieldValue::Number(self.value),
            TransactionColumn::Status => FieldValue::Text(match self.status {
                TransactionStatus::Completed => "Completed",
                TransactionStatus::Pending => "Pending",
                TransactionStatus::Failed => "Failed",
            }),
        }
    }

    fn summarize(rows: &[&Self]) -> TransactionSummary {
        let mut summary = TransactionSummary {
            count: rows.len(),
            buy_count: 0,
            sell_count: 0,
            buy_value: Decimal::ZERO,
            sell_value: Decimal::ZERO,
            net_value: Decimal::ZERO,
        };
        for t in rows {
            match t.side {
                TradeSide::Buy => {
                    summary.buy_count += 1;
                    summary.buy_value += t.value;
                }
                TradeSide::Sell => {
                    summary.sell_count += 1;
                    summary.sell_value += t.value;
                }
            }
        }
        summary.net_value = summary.buy_value - summary.sell_value;
        summary
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertColumn {
    Date,
    Title,
    Kind,
    Status,
    Ticker,
}

impl FromStr for AlertColumn {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(AlertColumn::Date),
            "title" => Ok(AlertColumn::Title),
            "kind" | "type" => Ok(AlertColumn::Kind),
            "status" => Ok(AlertColumn::Status),
            "ticker" => Ok(AlertColumn::Ticker),
            _ => Err(QueryError::UnknownColumn(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertSummary {
    pub count: usize,
    pub by_status: BTreeMap<AlertStatus, usize>,
}

impl Record for Alert {
    type Column = AlertColumn;
    type Category = AlertStatus;
    type Summary = AlertSummary;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        if let Some(ticker) = &self.ticker {
            fields.push(ticker.as_str());
        }
        fields
    }

    fn category(&self) -> AlertStatus {
        self.status
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn field(&self, column: AlertColumn) -> FieldValue<'_> {
        match column {
            AlertColumn::Date => FieldValue::Date(self.date),
            AlertColumn::Title => FieldValue::Text(&self.title),
            AlertColumn::Kind => FieldValue::Text(match self.kind {
                AlertKind::PriceTarget => "price_target",
                AlertKind::Earning => "earning",
                AlertKind::Dividend => "dividend",
                AlertKind::News => "news",
            }),
            AlertColumn::Status => FieldValue::Text(match self.status {
                AlertStatus::Active => "active",
                AlertStatus::Triggered => "triggered",
                AlertStatus::Expired => "expired",
            }),
            AlertColumn::Ticker => FieldValue::Text(self.ticker.as_deref().unwrap_or("")),
        }
    }

    fn summarize(rows: &[&Self]) -> AlertSummary {
        let mut by_status = BTreeMap::new();
        for a in rows {
            *by_status.entry(a.status).or_insert(0) += 1;
        }
        AlertSummary {
            count: rows.len(),
            by_status,
        }
    }
}
