// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use serde::Serialize;
use tracing::info;

use super::{holdings, transactions};
use crate::config::Settings;
use crate::models::{Holding, Transaction, holdings_from_assets};
use crate::seed;
use crate::table::filter_sorted;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Csv,
    Json,
}

fn format_of(sub: &ArgMatches) -> Result<Format> {
    let fmt = sub
        .get_one::<String>("format")
        .context("--format is required")?
        .to_lowercase();
    match fmt.as_str() {
        "csv" => Ok(Format::Csv),
        "json" => Ok(Format::Json),
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
}

pub fn handle(settings: &Settings, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("holdings", sub)) => {
            let records = holdings_from_assets(&seed::assets());
            export_holdings(settings, &records, sub)?;
        }
        Some(("transactions", sub)) => {
            export_transactions(settings, &seed::transactions(), sub)?;
        }
        _ => {}
    }
    Ok(())
}

fn write_json<T: Serialize>(out: &Path, rows: &[&T]) -> Result<()> {
    std::fs::write(out, serde_json::to_string_pretty(rows)?)
        .with_context(|| format!("Write {}", out.display()))
}

/// Every filtered row in display order, not just one page.
pub fn export_holdings(
    settings: &Settings,
    records: &[Holding],
    sub: &ArgMatches,
) -> Result<usize> {
    let fmt = format_of(sub)?;
    let out = Path::new(sub.get_one::<String>("out").context("--out is required")?);
    let q = holdings::query(settings, sub)?;
    let rows = filter_sorted(records, &q);

    match fmt {
        Format::Csv => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Create {}", out.display()))?;
            wtr.write_record([
                "asset",
                "ticker",
                "category",
                "quantity",
                "price",
                "value",
                "allocation_pct",
                "profit_loss",
                "profit_loss_pct",
            ])?;
            for h in &rows {
                wtr.write_record([
                    h.asset.clone(),
                    h.ticker.clone(),
                    h.category.to_string(),
                    h.quantity.to_string(),
                    h.price.to_string(),
                    h.value.to_string(),
                    h.allocation_pct.round_dp(2).to_string(),
                    h.profit_loss.to_string(),
                    h.profit_loss_pct.round_dp(2).to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        Format::Json => write_json(out, &rows)?,
    }
    info!(count = rows.len(), path = %out.display(), "exported holdings");
    println!("Exported {} holdings to {}", rows.len(), out.display());
    Ok(rows.len())
}

pub fn export_transactions(
    settings: &Settings,
    records: &[Transaction],
    sub: &ArgMatches,
) -> Result<usize> {
    let fmt = format_of(sub)?;
    let out = Path::new(sub.get_one::<String>("out").context("--out is required")?);
    let q = transactions::query(settings, sub)?;
    let rows = filter_sorted(records, &q);

    match fmt {
        Format::Csv => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Create {}", out.display()))?;
            wtr.write_record([
                "date", "type", "asset", "ticker", "quantity", "price", "value", "status",
            ])?;
            for t in &rows {
                wtr.write_record([
                    t.date.to_string(),
                    t.side.to_string(),
                    t.asset.clone(),
                    t.ticker.clone(),
                    t.quantity.to_string(),
                    t.price.to_string(),
                    t.value.to_string(),
                    t.status.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        Format::Json => write_json(out, &rows)?,
    }
    info!(count = rows.len(), path = %out.display(), "exported transactions");
    println!("Exported {} transactions to {}", rows.len(), out.display());
    Ok(rows.len())
}
