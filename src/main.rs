// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::env;

use anyhow::{Context, Result};
use clap::ArgMatches;
use tracing::error;
use tracing::level_filters::LevelFilter;

use folioview::config::{self, LOG_ENV, Settings};
use folioview::{cli, commands};

fn main() -> Result<()> {
    let result = app_main();

    if let Err(err) = &result {
        error!("{:#}", err);
    }

    result
}

/// `FOLIOVIEW_LOG` wins over the config file.
fn max_level(settings: Option<&Settings>) -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .or_else(|| settings.and_then(|s| s.level_filter().ok()))
        .unwrap_or(LevelFilter::WARN)
}

fn app_main() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    let settings = config::load();

    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level(max_level(settings.as_ref().ok()))
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")?;

    let settings = settings.context("Failed to load settings")?;
    dispatch(&settings, &matches)
}

fn dispatch(settings: &Settings, matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("holdings", sub)) => commands::holdings::handle(settings, sub)?,
        Some(("transactions", sub)) => commands::transactions::handle(settings, sub)?,
        Some(("alerts", sub)) => commands::alerts::handle(settings, sub)?,
        Some(("notifications", sub)) => commands::notifications::handle(sub)?,
        Some(("performance", sub)) => commands::performance::handle(settings, sub)?,
        Some(("overview", sub)) => commands::overview::handle(settings, sub)?,
        Some(("export", sub)) => commands::exporter::handle(settings, sub)?,
        Some(("dashboard", _)) => commands::dashboard::handle(settings)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
