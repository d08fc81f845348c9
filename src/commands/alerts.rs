// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use clap::ArgMatches;

use super::build_query;
use crate::config::Settings;
use crate::dashboard::{dismiss_alert, dismissed_toast};
use crate::models::{Alert, AlertStatus};
use crate::panels;
use crate::render::render_all;
use crate::seed;
use crate::table::{AlertColumn, QueryState, SortState, derive_view};
use crate::utils::maybe_print_json;

pub fn handle(settings: &Settings, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(settings, sub)?,
        Some(("dismiss", sub)) => {
            dismiss(settings, &seed::alerts(), sub)?;
        }
        _ => {}
    }
    Ok(())
}

/// Newest first; `--status` picks a tab.
pub fn query(
    settings: &Settings,
    sub: &ArgMatches,
) -> Result<QueryState<AlertColumn, AlertStatus>> {
    build_query(sub, settings, SortState::descending(AlertColumn::Date))
}

fn list(settings: &Settings, sub: &ArgMatches) -> Result<()> {
    let records = seed::alerts();
    let q = query(settings, sub)?;
    let view = derive_view(&records, &q);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &view.rows)? {
        println!("{}", render_all(&panels::alerts(&view, q.has_filters())));
    }
    Ok(())
}

/// Returns the alerts left after removing `--id`.
pub fn dismiss(settings: &Settings, alerts: &[Alert], sub: &ArgMatches) -> Result<Vec<Alert>> {
    let id = *sub.get_one::<i64>("id").context("--id is required")?;
    let (remaining, _) = dismiss_alert(alerts, id)?;
    dismissed_toast().show();

    let q = QueryState::new(SortState::descending(AlertColumn::Date))
        .with_page_size(settings.default_page_size)?;
    let view = derive_view(&remaining, &q);
    println!("{}", render_all(&panels::alerts(&view, false)));
    Ok(remaining)
}
