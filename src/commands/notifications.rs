// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::dashboard::{mark_all_read, mark_read};
use crate::models::Notification;
use crate::panels;
use crate::render::render_all;
use crate::seed;
use crate::utils::maybe_print_json;

pub fn handle(m: &ArgMatches) -> Result<()> {
    let items = seed::notifications();
    match m.subcommand() {
        Some(("list", sub)) => list(&items, sub)?,
        Some(("read", sub)) => {
            let id = *sub.get_one::<i64>("id").context("--id is required")?;
            show(&mark_read(&items, id)?);
        }
        Some(("read-all", _)) => show(&mark_all_read(&items)),
        _ => {}
    }
    Ok(())
}

pub fn visible(items: &[Notification], unread_only: bool) -> Vec<Notification> {
    items
        .iter()
        .filter(|n| !unread_only || !n.read)
        .cloned()
        .collect()
}

fn list(items: &[Notification], sub: &ArgMatches) -> Result<()> {
    let rows = visible(items, sub.get_flag("unread"));
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        show(&rows);
    }
    Ok(())
}

fn show(items: &[Notification]) {
    println!("{}", render_all(&panels::notifications(items)));
}
