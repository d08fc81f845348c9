// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use super::build_query;
use crate::config::Settings;
use crate::models::{AssetType, Holding, holdings_from_assets};
use crate::panels;
use crate::render::render_all;
use crate::seed;
use crate::table::{HoldingColumn, QueryState, SortState, derive_view};
use crate::utils::maybe_print_json;

pub fn handle(settings: &Settings, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(settings, sub)?,
        _ => {}
    }
    Ok(())
}

/// Largest positions first unless the caller picks a column.
pub fn query(
    settings: &Settings,
    sub: &ArgMatches,
) -> Result<QueryState<HoldingColumn, AssetType>> {
    build_query(sub, settings, SortState::descending(HoldingColumn::Value))
}

/// The visible page for these flags.
pub fn query_rows(
    settings: &Settings,
    records: &[Holding],
    sub: &ArgMatches,
) -> Result<Vec<Holding>> {
    let q = query(settings, sub)?;
    let view = derive_view(records, &q);
    Ok(view.rows.into_iter().cloned().collect())
}

fn list(settings: &Settings, sub: &ArgMatches) -> Result<()> {
    let records = holdings_from_assets(&seed::assets());
    let q = query(settings, sub)?;
    let view = derive_view(&records, &q);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &view.rows)? {
        let widgets = panels::holdings(&view, &settings.currency_symbol, q.has_filters());
        println!("{}", render_all(&widgets));
    }
    Ok(())
}
