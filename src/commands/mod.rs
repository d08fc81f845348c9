// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::any::Any;
use std::str::FromStr;

use anyhow::Result;
use clap::ArgMatches;

use crate::config::Settings;
use crate::error::QueryError;
use crate::table::{QueryAction, QueryState, SortDirection, SortState};
use crate::utils::parse_date;

pub mod alerts;
pub mod dashboard;
pub mod exporter;
pub mod holdings;
pub mod notifications;
pub mod overview;
pub mod performance;
pub mod transactions;

/// Value of an argument that may not be defined on this subcommand.
pub(crate) fn opt<'a, T: Any + Clone + Send + Sync + 'static>(
    m: &'a ArgMatches,
    id: &str,
) -> Option<&'a T> {
    m.try_get_one::<T>(id).ok().flatten()
}

/// Turn the shared table flags into a query, starting from the panel's default sort.
///
/// `--sort COL` starts that column unsorted and selects it `--clicks` times.
pub fn build_query<C, K>(
    m: &ArgMatches,
    settings: &Settings,
    default_sort: SortState<C>,
) -> Result<QueryState<C, K>>
where
    C: FromStr<Err = QueryError> + Copy + Eq,
    K: FromStr<Err = QueryError> + Copy + Eq,
{
    let page_size = opt::<usize>(m, "page-size")
        .copied()
        .unwrap_or(settings.default_page_size);
    let mut q = QueryState::new(default_sort).with_page_size(page_size)?;

    if let Some(search) = opt::<String>(m, "search") {
        q = q.reduce(QueryAction::Search(search.clone()))?;
    }
    if let Some(category) = opt::<String>(m, "category") {
        q = q.reduce(QueryAction::FilterCategory(Some(category.parse::<K>()?)))?;
    }
    if let Some(date) = opt::<String>(m, "date") {
        q = q.reduce(QueryAction::FilterDate(Some(parse_date(date)?)))?;
    }
    if let Some(col) = opt::<String>(m, "sort") {
        let column: C = col.parse()?;
        q.sort = SortState {
            column,
            direction: SortDirection::Unsorted,
        };
        let clicks = opt::<u8>(m, "clicks").copied().unwrap_or(1);
        for _ in 0..clicks {
            q = q.reduce(QueryAction::SortBy(column))?;
        }
    }
    if let Some(page) = opt::<usize>(m, "page") {
        q = q.reduce(QueryAction::GoToPage(*page))?;
    }
    Ok(q)
}
