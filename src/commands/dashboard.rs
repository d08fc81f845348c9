// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::{info, warn};

use crate::config::Settings;
use crate::dashboard::{Command, DashboardState, HELP, parse_command};
use crate::render::{Widget, render, render_all};

pub fn handle(settings: &Settings) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(settings, stdin.lock(), &mut stdout)?;
    Ok(())
}

/// Read commands until `quit` or end of input; returns the final state.
pub fn run<R: BufRead, W: Write>(
    settings: &Settings,
    input: R,
    out: &mut W,
) -> Result<DashboardState> {
    let mut state = DashboardState::new(settings)?;
    writeln!(out, "{}", render_all(&state.widgets()))?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => writeln!(out, "{}", HELP)?,
            Ok(Some(cmd)) => match state.apply(cmd) {
                Ok((next, toast)) => {
                    state = next;
                    if let Some(t) = toast {
                        info!(title = %t.title, description = %t.description, "toast");
                        writeln!(out, "{}", render(&Widget::Toast(t)))?;
                    }
                    writeln!(out, "{}", render_all(&state.widgets()))?;
                }
                Err(e) => {
                    warn!(error = %e, "command rejected");
                    writeln!(out, "error: {}", e)?;
                }
            },
            Err(e) => writeln!(out, "error: {}", e)?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(state)
}
