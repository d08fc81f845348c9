// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Add-transaction form checks, expressed as a rule table.
//!
//! Rules run in table order. Each field reports only its first failing rule,
//! and every field is checked, so the caller can show all problems at once.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::TradeSide;
use crate::seed::ASSET_SUGGESTIONS;
use crate::toast::Toast;
use crate::utils::{fmt_currency, parse_date, parse_decimal};

static TICKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9.\-]{1,12}$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Asset,
    Ticker,
    Type,
    Quantity,
    Price,
    Date,
    AssetType,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FormField::Asset => "asset",
            FormField::Ticker => "ticker",
            FormField::Type => "type",
            FormField::Quantity => "quantity",
            FormField::Price => "price",
            FormField::Date => "date",
            FormField::AssetType => "asset type",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormAssetType {
    Crypto,
    Stock,
    Etf,
    Other,
}

impl FromStr for FormAssetType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "crypto" => Ok(FormAssetType::Crypto),
            "stock" => Ok(FormAssetType::Stock),
            "etf" => Ok(FormAssetType::Etf),
            "other" => Ok(FormAssetType::Other),
            _ => Err(()),
        }
    }
}

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionForm {
    pub asset: String,
    pub ticker: String,
    pub side: String,
    pub quantity: String,
    pub price: String,
    pub date: String,
    pub asset_type: String,
}

impl TransactionForm {
    fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Asset => &self.asset,
            FormField::Ticker => &self.ticker,
            FormField::Type => &self.side,
            FormField::Quantity => &self.quantity,
            FormField::Price => &self.price,
            FormField::Date => &self.date,
            FormField::AssetType => &self.asset_type,
        }
    }

    /// Fill a blank ticker from the known asset list.
    pub fn autofill_ticker(mut self) -> Self {
        if self.ticker.trim().is_empty() {
            let name = self.asset.trim();
            if let Some((_, ticker)) = ASSET_SUGGESTIONS
                .iter()
                .find(|(n, _)| n.eq_ignore_ascii_case(name))
            {
                self.ticker = (*ticker).to_string();
            }
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

pub struct Rule {
    pub field: FormField,
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

fn required(v: &str) -> bool {
    !v.trim().is_empty()
}

fn positive_number(v: &str) -> bool {
    parse_decimal(v).map(|n| n > Decimal::ZERO).unwrap_or(false)
}

fn ticker_shape(v: &str) -> bool {
    TICKER_RE.is_match(v.trim())
}

fn trade_side(v: &str) -> bool {
    v.parse::<TradeSide>().is_ok()
}

fn iso_date(v: &str) -> bool {
    parse_date(v).is_ok()
}

fn form_asset_type(v: &str) -> bool {
    v.parse::<FormAssetType>().is_ok()
}

/// Ticker input must also look like a symbol, which is stricter than just
/// being present; the confirmed ticker is upper-cased.
pub const TRANSACTION_RULES: &[Rule] = &[
    Rule {
        field: FormField::Asset,
        check: required,
        message: "Asset is required",
    },
    Rule {
        field: FormField::Ticker,
        check: required,
        message: "Ticker is required",
    },
    Rule {
        field: FormField::Ticker,
        check: ticker_shape,
        message: "Ticker must be 1-12 letters, digits, '.' or '-'",
    },
    Rule {
        field: FormField::Type,
        check: trade_side,
        message: "Type must be Buy or Sell",
    },
    Rule {
        field: FormField::Quantity,
        check: required,
        message: "Quantity is required",
    },
    Rule {
        field: FormField::Quantity,
        check: positive_number,
        message: "Quantity must be a positive number",
    },
    Rule {
        field: FormField::Price,
        check: required,
        message: "Price is required",
    },
    Rule {
        field: FormField::Price,
        check: positive_number,
        message: "Price must be a positive number",
    },
    Rule {
        field: FormField::Date,
        check: required,
        message: "Date is required",
    },
    Rule {
        field: FormField::Date,
        check: iso_date,
        message: "Date must be YYYY-MM-DD",
    },
    Rule {
        field: FormField::AssetType,
        check: form_asset_type,
        message: "Asset type is required",
    },
];

pub fn check(form: &TransactionForm, rules: &[Rule]) -> Vec<FieldError> {
    let mut errors: Vec<FieldError> = Vec::new();
    for rule in rules {
        if errors.iter().any(|e| e.field == rule.field) {
            continue;
        }
        if !(rule.check)(form.value(rule.field)) {
            errors.push(FieldError {
                field: rule.field,
                message: rule.message.to_string(),
            });
        }
    }
    errors
}

/// A form that passed every rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidTransaction {
    pub asset: String,
    pub ticker: String,
    pub side: TradeSide,
    pub quantity: Decimal,
    pub price: Decimal,
    pub value: Decimal,
    pub date: NaiveDate,
    pub asset_type: FormAssetType,
}

impl ValidTransaction {
    pub fn confirmation(&self, currency_symbol: &str) -> Toast {
        Toast::new(
            "Transaction Added",
            format!(
                "{} {} {} at {} each ({} total)",
                self.side,
                self.quantity.normalize(),
                self.ticker,
                fmt_currency(&self.price, currency_symbol),
                fmt_currency(&self.value, currency_symbol),
            ),
        )
    }
}

pub fn validate(form: &TransactionForm) -> Result<ValidTransaction, Vec<FieldError>> {
    let errors = check(form, TRANSACTION_RULES);
    if !errors.is_empty() {
        return Err(errors);
    }
    let invalid = |field: FormField, message: &str| {
        vec![FieldError {
            field,
            message: message.to_string(),
        }]
    };
    let side = form
        .side
        .parse::<TradeSide>()
        .map_err(|e| invalid(FormField::Type, &e.to_string()))?;
    let quantity =
        parse_decimal(&form.quantity).map_err(|e| invalid(FormField::Quantity, &e.to_string()))?;
    let price =
        parse_decimal(&form.price).map_err(|e| invalid(FormField::Price, &e.to_string()))?;
    let date = parse_date(&form.date).map_err(|e| invalid(FormField::Date, &e.to_string()))?;
    let asset_type = form
        .asset_type
        .parse::<FormAssetType>()
        .map_err(|_| invalid(FormField::AssetType, "Asset type is required"))?;
    Ok(ValidTransaction {
        asset: form.asset.trim().to_string(),
        ticker: form.ticker.trim().to_uppercase(),
        side,
        quantity,
        price,
        value: quantity * price,
        date,
        asset_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> TransactionForm {
        TransactionForm {
            asset: "Apple Inc.".into(),
            ticker: "AAPL".into(),
            side: "Buy".into(),
            quantity: "5".into(),
            price: "150".into(),
            date: "2023-04-10".into(),
            asset_type: "Stock".into(),
        }
    }

    #[test]
    fn empty_quantity_reports_required_only() {
        let mut f = form();
        f.quantity = "  ".into();
        let errors = check(&f, TRANSACTION_RULES);
        assert_eq!(
            errors,
            vec![FieldError {
                field: FormField::Quantity,
                message: "Quantity is required".into()
            }]
        );
    }

    #[test]
    fn ticker_shape_is_enforced() {
        assert!(ticker_shape("HDFCBANK.NS"));
        assert!(ticker_shape("BRK-B"));
        assert!(!ticker_shape("NOT A TICKER"));
    }
}
