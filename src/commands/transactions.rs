// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use clap::ArgMatches;

use super::build_query;
use crate::config::Settings;
use crate::models::{TradeSide, Transaction};
use crate::panels;
use crate::render::render_all;
use crate::seed;
use crate::table::{QueryState, SortState, TransactionColumn, derive_view};
use crate::utils::maybe_print_json;
use crate::validation::{TransactionForm, ValidTransaction, validate};

pub fn handle(settings: &Settings, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(settings, sub)?,
        Some(("add", sub)) => {
            add(settings, sub)?;
        }
        _ => {}
    }
    Ok(())
}

pub fn query(
    settings: &Settings,
    sub: &ArgMatches,
) -> Result<QueryState<TransactionColumn, TradeSide>> {
    build_query(sub, settings, SortState::descending(TransactionColumn::Date))
}

pub fn query_rows(
    settings: &Settings,
    records: &[Transaction],
    sub: &ArgMatches,
) -> Result<Vec<Transaction>> {
    let q = query(settings, sub)?;
    let view = derive_view(records, &q);
    Ok(view.rows.into_iter().cloned().collect())
}

fn list(settings: &Settings, sub: &ArgMatches) -> Result<()> {
    let records = seed::transactions();
    let q = query(settings, sub)?;
    let view = derive_view(&records, &q);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &view.rows)? {
        let widgets = panels::transactions(&view, &settings.currency_symbol, q.has_filters());
        println!("{}", render_all(&widgets));
    }
    Ok(())
}

pub fn form_from_matches(sub: &ArgMatches) -> TransactionForm {
    let text = |id: &str| sub.get_one::<String>(id).cloned().unwrap_or_default();
    TransactionForm {
        asset: text("asset"),
        ticker: text("ticker"),
        side: text("side"),
        quantity: text("quantity"),
        price: text("price"),
        date: text("date"),
        asset_type: text("asset-type"),
    }
    .autofill_ticker()
}

/// Validate, confirm and discard. Every failing field is reported.
pub fn add(settings: &Settings, sub: &ArgMatches) -> Result<ValidTransaction> {
    let form = form_from_matches(sub);
    match validate(&form) {
        Ok(tx) => {
            if sub.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&tx)?);
            }
            tx.confirmation(&settings.currency_symbol).show();
            Ok(tx)
        }
        Err(errors) => {
            for e in &errors {
                eprintln!("{}: {}", e.field, e.message);
            }
            bail!("Transaction rejected: {} invalid field(s)", errors.len())
        }
    }
}
