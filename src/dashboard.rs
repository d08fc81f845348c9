// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Interactive dashboard session state.
//!
//! A typed line becomes a [`Command`]; [`DashboardState::apply`] returns the
//! next state without touching the current one, so a rejected command leaves
//! the session exactly as it was.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use tracing::debug;

use crate::config::Settings;
use crate::error::{CommandError, QueryError};
use crate::models::{
    Alert, AlertStatus, AssetType, Holding, Notification, PerformancePoint, TradeSide,
    Transaction, holdings_from_assets,
};
use crate::panels;
use crate::performance::{self, Timeframe};
use crate::render::Widget;
use crate::seed;
use crate::table::{
    AlertColumn, HoldingColumn, QueryAction, QueryState, Record, SortState, TransactionColumn,
    derive_view,
};
use crate::toast::Toast;

pub const HELP: &str = "\
view <overview|holdings|transactions|alerts|notifications|performance>
search [text]        free-text search (empty clears)
filter [value|all]   category, type, status or timeframe for the current panel
date [YYYY-MM-DD|all]
sort <column>        click a column header (asc -> desc -> none)
page <n> | next | prev
size <5|10|20|50>
clear                drop search and filters
dismiss <alert id>
read <notification id> | read-all
help | quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Overview,
    Holdings,
    Transactions,
    Alerts,
    Notifications,
    Performance,
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Panel::Overview => "overview",
            Panel::Holdings => "holdings",
            Panel::Transactions => "transactions",
            Panel::Alerts => "alerts",
            Panel::Notifications => "notifications",
            Panel::Performance => "performance",
        };
        f.write_str(s)
    }
}

impl FromStr for Panel {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overview" | "home" => Ok(Panel::Overview),
            "holdings" | "portfolio" => Ok(Panel::Holdings),
            "transactions" | "tx" => Ok(Panel::Transactions),
            "alerts" => Ok(Panel::Alerts),
            "notifications" => Ok(Panel::Notifications),
            "performance" => Ok(Panel::Performance),
            _ => Err(CommandError::MissingArgument {
                command: "view",
                expected: "a panel name",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    View(Panel),
    Search(String),
    Filter(Option<String>),
    Date(Option<NaiveDate>),
    Sort(String),
    Page(usize),
    Next,
    Prev,
    Size(usize),
    Clear,
    Dismiss(i64),
    Read(i64),
    ReadAll,
    Help,
    Quit,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::View(_) => "view",
            Command::Search(_) => "search",
            Command::Filter(_) => "filter",
            Command::Date(_) => "date",
            Command::Sort(_) => "sort",
            Command::Page(_) => "page",
            Command::Next => "next",
            Command::Prev => "prev",
            Command::Size(_) => "size",
            Command::Clear => "clear",
            Command::Dismiss(_) => "dismiss",
            Command::Read(_) => "read",
            Command::ReadAll => "read-all",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

fn number<T: FromStr>(
    rest: &str,
    command: &'static str,
    expected: &'static str,
) -> Result<T, CommandError> {
    rest.parse::<T>()
        .map_err(|_| CommandError::MissingArgument { command, expected })
}

fn optional(rest: &str) -> Option<String> {
    if rest.is_empty() || rest.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(rest.to_string())
    }
}

/// `Ok(None)` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((h, r)) => (h, r.trim()),
        None => (line, ""),
    };
    let cmd = match head.to_lowercase().as_str() {
        "view" | "v" => Command::View(rest.parse()?),
        "search" | "s" => Command::Search(rest.to_string()),
        "filter" | "f" => Command::Filter(optional(rest)),
        "date" => match optional(rest) {
            None => Command::Date(None),
            Some(d) => Command::Date(Some(
                NaiveDate::parse_from_str(&d, "%Y-%m-%d").map_err(|_| {
                    CommandError::MissingArgument {
                        command: "date",
                        expected: "a YYYY-MM-DD date or 'all'",
                    }
                })?,
            )),
        },
        "sort" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "sort",
                    expected: "a column name",
                });
            }
            Command::Sort(rest.to_string())
        }
        "page" | "p" => Command::Page(number(rest, "page", "a page number")?),
        "next" | "n" => Command::Next,
        "prev" => Command::Prev,
        "size" => Command::Size(number(rest, "size", "a page size")?),
        "clear" => Command::Clear,
        "dismiss" => Command::Dismiss(number(rest, "dismiss", "an alert id")?),
        "read" => Command::Read(number(rest, "read", "a notification id")?),
        "read-all" => Command::ReadAll,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(cmd))
}

/// Remove one alert, returning the remaining list and the removed entry.
pub fn dismiss_alert(alerts: &[Alert], id: i64) -> Result<(Vec<Alert>, Alert), CommandError> {
    let removed = alerts
        .iter()
        .find(|a| a.id == id)
        .cloned()
        .ok_or(CommandError::NotFound { kind: "alert", id })?;
    let rest = alerts.iter().filter(|a| a.id != id).cloned().collect();
    Ok((rest, removed))
}

pub fn dismissed_toast() -> Toast {
    Toast::new("Alert dismissed", "The alert has been removed from your list.")
}

pub fn mark_read(items: &[Notification], id: i64) -> Result<Vec<Notification>, CommandError> {
    if !items.iter().any(|n| n.id == id) {
        return Err(CommandError::NotFound {
            kind: "notification",
            id,
        });
    }
    Ok(items
        .iter()
        .map(|n| Notification {
            read: n.read || n.id == id,
            ..n.clone()
        })
        .collect())
}

pub fn mark_all_read(items: &[Notification]) -> Vec<Notification> {
    items
        .iter()
        .map(|n| Notification {
            read: true,
            ..n.clone()
        })
        .collect()
}

pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.read).count()
}

/// Apply a table command to one panel's query.
fn table_command<T>(
    records: &[T],
    query: &QueryState<T::Column, T::Category>,
    cmd: &Command,
) -> Result<QueryState<T::Column, T::Category>, CommandError>
where
    T: Record,
    T::Column: FromStr<Err = QueryError>,
    T::Category: FromStr<Err = QueryError>,
{
    let action = match cmd {
        Command::Search(s) => QueryAction::Search(s.clone()),
        Command::Filter(v) => QueryAction::FilterCategory(
            v.as_deref().map(|s| s.parse::<T::Category>()).transpose()?,
        ),
        Command::Date(d) => QueryAction::FilterDate(*d),
        Command::Sort(col) => QueryAction::SortBy(col.parse::<T::Column>()?),
        Command::Page(n) => QueryAction::GoToPage(*n),
        Command::Next => {
            if !derive_view(records, query).has_next_page() {
                return Ok(query.clone());
            }
            QueryAction::NextPage
        }
        Command::Prev => QueryAction::PreviousPage,
        Command::Size(n) => QueryAction::SetPageSize(*n),
        Command::Clear => QueryAction::ClearFilters,
        _ => return Ok(query.clone()),
    };
    Ok(query.clone().reduce(action)?)
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    pub panel: Panel,
    pub holdings: Vec<Holding>,
    pub transactions: Vec<Transaction>,
    pub alerts: Vec<Alert>,
    pub notifications: Vec<Notification>,
    pub performance: Vec<PerformancePoint>,
    pub holdings_query: QueryState<HoldingColumn, AssetType>,
    pub transactions_query: QueryState<TransactionColumn, TradeSide>,
    pub alerts_query: QueryState<AlertColumn, AlertStatus>,
    pub timeframe: Timeframe,
    pub currency_symbol: String,
}

impl DashboardState {
    /// Session over the built-in sample data.
    pub fn new(settings: &Settings) -> Result<Self, QueryError> {
        let size = settings.default_page_size;
        Ok(DashboardState {
            panel: Panel::Overview,
            holdings: holdings_from_assets(&seed::assets()),
            transactions: seed::transactions(),
            alerts: seed::alerts(),
            notifications: seed::notifications(),
            performance: seed::default_performance(),
            holdings_query: QueryState::new(SortState::descending(HoldingColumn::Value))
                .with_page_size(size)?,
            transactions_query: QueryState::new(SortState::descending(TransactionColumn::Date))
                .with_page_size(size)?,
            alerts_query: QueryState::new(SortState::descending(AlertColumn::Date))
                .with_page_size(size)?,
            timeframe: settings.performance_timeframe,
            currency_symbol: settings.currency_symbol.clone(),
        })
    }

    fn not_here(&self, cmd: &Command) -> CommandError {
        CommandError::NotApplicable {
            command: cmd.name().to_string(),
            panel: self.panel.to_string(),
        }
    }

    /// Next state plus any toast the command raised.
    pub fn apply(&self, cmd: Command) -> Result<(DashboardState, Option<Toast>), CommandError> {
        debug!(command = cmd.name(), panel = %self.panel, "dashboard command");
        let mut next = self.clone();
        let mut toast = None;
        match &cmd {
            Command::View(panel) => next.panel = *panel,
            Command::Help | Command::Quit => {}
            Command::Dismiss(id) => {
                let (rest, _) = dismiss_alert(&self.alerts, *id)?;
                next.alerts = rest;
                toast = Some(dismissed_toast());
            }
            Command::Read(id) => next.notifications = mark_read(&self.notifications, *id)?,
            Command::ReadAll => next.notifications = mark_all_read(&self.notifications),
            _ => match self.panel {
                Panel::Holdings => {
                    if matches!(cmd, Command::Date(_)) {
                        return Err(self.not_here(&cmd));
                    }
                    next.holdings_query =
                        table_command(&self.holdings, &self.holdings_query, &cmd)?;
                }
                Panel::Transactions => {
                    next.transactions_query =
                        table_command(&self.transactions, &self.transactions_query, &cmd)?;
                }
                Panel::Alerts => {
                    next.alerts_query = table_command(&self.alerts, &self.alerts_query, &cmd)?;
                }
                Panel::Performance => match &cmd {
                    Command::Filter(Some(tf)) => next.timeframe = tf.parse()?,
                    Command::Filter(None) => next.timeframe = Timeframe::All,
                    _ => return Err(self.not_here(&cmd)),
                },
                Panel::Overview | Panel::Notifications => return Err(self.not_here(&cmd)),
            },
        }
        Ok((next, toast))
    }

    pub fn widgets(&self) -> Vec<Widget> {
        let symbol = self.currency_symbol.as_str();
        match self.panel {
            Panel::Overview => {
                let o = performance::overview(&self.holdings, &self.performance);
                let mut w = panels::overview(&o, symbol);
                let unread = unread_count(&self.notifications);
                if unread > 0 {
                    w.push(Widget::Banner {
                        title: "Notifications".to_string(),
                        message: format!("{} unread", unread),
                    });
                }
                w
            }
            Panel::Holdings => {
                let view = derive_view(&self.holdings, &self.holdings_query);
                panels::holdings(&view, symbol, self.holdings_query.has_filters())
            }
            Panel::Transactions => {
                let view = derive_view(&self.transactions, &self.transactions_query);
                panels::transactions(&view, symbol, self.transactions_query.has_filters())
            }
            Panel::Alerts => {
                let view = derive_view(&self.alerts, &self.alerts_query);
                panels::alerts(&view, self.alerts_query.has_filters())
            }
            Panel::Notifications => panels::notifications(&self.notifications),
            Panel::Performance => match performance::metrics(&self.performance, self.timeframe) {
                Some(m) => panels::performance(&m, symbol),
                None => vec![Widget::EmptyState {
                    title: "No performance data".to_string(),
                    hint: "The series is empty.".to_string(),
                }],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(parse_command("   ").unwrap(), None);
        assert_eq!(
            parse_command("view holdings").unwrap(),
            Some(Command::View(Panel::Holdings))
        );
        assert_eq!(
            parse_command("search apple inc").unwrap(),
            Some(Command::Search("apple inc".into()))
        );
        assert_eq!(parse_command("filter all").unwrap(), Some(Command::Filter(None)));
        assert_eq!(parse_command("page 3").unwrap(), Some(Command::Page(3)));
        assert!(matches!(
            parse_command("page x"),
            Err(CommandError::MissingArgument { command: "page", .. })
        ));
        assert!(matches!(parse_command("bogus"), Err(CommandError::Unknown(_))));
    }

    #[test]
    fn mark_read_leaves_others() {
        let items = seed::notifications();
        let next = mark_read(&items, 1).unwrap();
        assert!(next[0].read);
        assert!(!next[1].read);
        assert_eq!(unread_count(&next), 1);
        assert_eq!(unread_count(&mark_all_read(&items)), 0);
        assert!(mark_read(&items, 99).is_err());
    }
}
