// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tracing::debug;

use super::Record;
use super::query::{QueryState, SortDirection};

/// One visible page plus totals over everything that passed the filters.
#[derive(Debug, Clone)]
pub struct DerivedView<'a, T: Record> {
    pub rows: Vec<&'a T>,
    pub total_count: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
    pub summary: T::Summary,
}

impl<T: Record> DerivedView<'_, T> {
    /// Nothing matched the active filters.
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}

fn matches<T: Record>(
    record: &T,
    query: &QueryState<T::Column, T::Category>,
    needle: &str,
) -> bool {
    if !needle.is_empty()
        && !record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    {
        return false;
    }
    if let Some(category) = query.category {
        if record.category() != category {
            return false;
        }
    }
    if let Some(date) = query.date {
        if record.date() != Some(date) {
            return false;
        }
    }
    true
}

/// Every record passing the filters, in display order.
pub fn filter_sorted<'a, T: Record>(
    records: &'a [T],
    query: &QueryState<T::Column, T::Category>,
) -> Vec<&'a T> {
    let needle = query.search.to_lowercase();
    let mut rows: Vec<&T> = records
        .iter()
        .filter(|r| matches(*r, query, &needle))
        .collect();

    let column = query.sort.column;
    match query.sort.direction {
        SortDirection::Ascending => {
            rows.sort_by(|a, b| a.field(column).compare(&b.field(column)));
        }
        SortDirection::Descending => {
            rows.sort_by(|a, b| b.field(column).compare(&a.field(column)));
        }
        SortDirection::Unsorted => {}
    }
    rows
}

pub fn derive_view<'a, T: Record>(
    records: &'a [T],
    query: &QueryState<T::Column, T::Category>,
) -> DerivedView<'a, T> {
    let filtered = filter_sorted(records, query);
    let summary = T::summarize(&filtered);
    let total_count = filtered.len();
    let page_size = query.page_size.max(1);
    let total_pages = total_count.div_ceil(page_size);
    let start = query.page.saturating_sub(1).saturating_mul(page_size);
    let rows: Vec<&T> = filtered.into_iter().skip(start).take(page_size).collect();

    debug!(
        total_count,
        total_pages,
        page = query.page,
        visible = rows.len(),
        "derived table view"
    );

    DerivedView {
        rows,
        total_count,
        total_pages,
        page: query.page,
        page_size,
        summary,
    }
}
