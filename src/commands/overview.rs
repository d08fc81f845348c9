// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use crate::config::Settings;
use crate::models::holdings_from_assets;
use crate::panels;
use crate::performance::overview;
use crate::render::render_all;
use crate::seed;
use crate::utils::maybe_print_json;

pub fn handle(settings: &Settings, m: &ArgMatches) -> Result<()> {
    let holdings = holdings_from_assets(&seed::assets());
    let o = overview(&holdings, &seed::default_performance());
    if !maybe_print_json(m.get_flag("json"), false, &o)? {
        println!("{}", render_all(&panels::overview(&o, &settings.currency_symbol)));
    }
    Ok(())
}
