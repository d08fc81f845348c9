// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use folioview::models::TradeSide;
use folioview::validation::{FormField, TransactionForm, validate};
use rust_decimal::Decimal;

fn blank() -> TransactionForm {
    TransactionForm {
        asset: String::new(),
        ticker: String::new(),
        side: "Buy".into(),
        quantity: String::new(),
        price: String::new(),
        date: String::new(),
        asset_type: "Stock".into(),
    }
}

#[test]
fn reports_every_failing_field() {
    let errors = validate(&blank()).unwrap_err();
    let fields: Vec<FormField> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec![
            FormField::Asset,
            FormField::Ticker,
            FormField::Quantity,
            FormField::Price,
            FormField::Date
        ]
    );
}

#[test]
fn non_positive_numbers_are_rejected() {
    let form = TransactionForm {
        asset: "Apple Inc.".into(),
        ticker: "AAPL".into(),
        quantity: "0".into(),
        price: "abc".into(),
        date: "2023-04-10".into(),
        ..blank()
    };
    let errors = validate(&form).unwrap_err();
    let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        vec!["Quantity must be a positive number", "Price must be a positive number"]
    );
}

#[test]
fn unknown_type_and_asset_type_fail() {
    let form = TransactionForm {
        asset: "Apple Inc.".into(),
        ticker: "AAPL".into(),
        side: "Hold".into(),
        quantity: "1".into(),
        price: "1".into(),
        date: "2023-04-10".into(),
        asset_type: "Bond".into(),
    };
    let errors = validate(&form).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field, FormField::Type);
    assert_eq!(errors[1].message, "Asset type is required");
}

#[test]
fn ticker_is_filled_from_known_assets() {
    let form = TransactionForm {
        asset: "bitcoin".into(),
        ..blank()
    }
    .autofill_ticker();
    assert_eq!(form.ticker, "BTC");

    let kept = TransactionForm {
        asset: "Bitcoin".into(),
        ticker: "WBTC".into(),
        ..blank()
    }
    .autofill_ticker();
    assert_eq!(kept.ticker, "WBTC");
}

#[test]
fn valid_form_yields_value_and_toast() {
    let form = TransactionForm {
        asset: "Apple Inc.".into(),
        ticker: "aapl".into(),
        side: "buy".into(),
        quantity: "5".into(),
        price: "150".into(),
        date: "2023-04-10".into(),
        asset_type: "stock".into(),
    };
    let tx = validate(&form).unwrap();
    assert_eq!(tx.side, TradeSide::Buy);
    assert_eq!(tx.ticker, "AAPL");
    assert_eq!(tx.value, Decimal::from(750));

    let toast = tx.confirmation("$");
    assert_eq!(toast.title, "Transaction Added");
    assert_eq!(toast.description, "Buy 5 AAPL at $150 each ($750 total)");
}
