// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Client-side tabular data derivation: filter, sort, paginate and total.
//!
//! Every panel (holdings, transactions, alerts) goes through the same
//! [`pipeline::derive_view`]; the per-domain parts live in [`domains`].

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

pub mod domains;
pub mod pipeline;
pub mod query;

pub use domains::{
    AlertColumn, AlertSummary, HoldingColumn, HoldingsSummary, TransactionColumn,
    TransactionSummary,
};
pub use pipeline::{DerivedView, derive_view, filter_sorted};
pub use query::{PAGE_SIZE_OPTIONS, QueryAction, QueryState, SortDirection, SortState};

/// A single sortable cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Number(Decimal),
    Text(&'a str),
    Date(NaiveDate),
}

impl FieldValue<'_> {
    /// Values of different shapes compare equal, leaving their order untouched.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => locale_compare(a, b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Case-insensitive ordering with lowercase sorting ahead of uppercase on ties.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    primary.then_with(|| b.cmp(a))
}

/// A row type the pipeline can filter, sort and total.
pub trait Record {
    type Column: Copy + Eq + fmt::Debug;
    type Category: Copy + Eq + fmt::Debug;
    type Summary: fmt::Debug + Clone + Serialize;

    /// Text fields the free-text search looks at.
    fn search_fields(&self) -> Vec<&str>;

    fn category(&self) -> Self::Category;

    fn date(&self) -> Option<NaiveDate> {
        None
    }

    fn field(&self, column: Self::Column) -> FieldValue<'_>;

    fn summarize(rows: &[&Self]) -> Self::Summary;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Zeta", "alpha"), Ordering::Greater);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn mismatched_field_shapes_compare_equal() {
        let n = FieldValue::Number(Decimal::ONE);
        let t = FieldValue::Text("x");
        assert_eq!(n.compare(&t), Ordering::Equal);
    }
}
