// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::config::Settings;
use crate::panels;
use crate::performance::{PerformanceMetrics, Timeframe, metrics};
use crate::render::render_all;
use crate::seed;
use crate::utils::maybe_print_json;

pub fn timeframe(settings: &Settings, m: &ArgMatches) -> Result<Timeframe> {
    match m.get_one::<String>("timeframe") {
        Some(tf) => Ok(tf.parse::<Timeframe>()?),
        None => Ok(settings.performance_timeframe),
    }
}

pub fn compute(settings: &Settings, m: &ArgMatches) -> Result<PerformanceMetrics> {
    let tf = timeframe(settings, m)?;
    metrics(&seed::default_performance(), tf).context("No performance data available")
}

pub fn handle(settings: &Settings, m: &ArgMatches) -> Result<()> {
    let figures = compute(settings, m)?;
    if !maybe_print_json(m.get_flag("json"), false, &figures)? {
        println!("{}", render_all(&panels::performance(&figures, &settings.currency_symbol)));
    }
    Ok(())
}
