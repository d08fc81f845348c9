// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::QueryError;

pub const PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 20, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
    Unsorted,
}

impl SortDirection {
    /// asc -> desc -> none -> asc
    pub fn next(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Unsorted,
            SortDirection::Unsorted => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<C> {
    pub column: C,
    pub direction: SortDirection,
}

impl<C: Copy + Eq> SortState<C> {
    pub fn ascending(column: C) -> Self {
        SortState {
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: C) -> Self {
        SortState {
            column,
            direction: SortDirection::Descending,
        }
    }

    /// Header click: the same column advances the cycle, another column starts ascending.
    pub fn select(self, column: C) -> Self {
        if self.column == column {
            SortState {
                column,
                direction: self.direction.next(),
            }
        } else {
            SortState::ascending(column)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryAction<C, K> {
    Search(String),
    FilterCategory(Option<K>),
    FilterDate(Option<NaiveDate>),
    SortBy(C),
    GoToPage(usize),
    NextPage,
    PreviousPage,
    SetPageSize(usize),
    ClearFilters,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState<C, K> {
    pub search: String,
    pub category: Option<K>,
    pub date: Option<NaiveDate>,
    pub sort: SortState<C>,
    pub page: usize,
    pub page_size: usize,
}

impl<C: Copy + Eq, K: Copy + Eq> QueryState<C, K> {
    pub fn new(sort: SortState<C>) -> Self {
        QueryState {
            search: String::new(),
            category: None,
            date: None,
            sort,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(self, page_size: usize) -> Result<Self, QueryError> {
        self.reduce(QueryAction::SetPageSize(page_size))
    }

    pub fn has_filters(&self) -> bool {
        !self.search.is_empty() || self.category.is_some() || self.date.is_some()
    }

    pub fn reduce(self, action: QueryAction<C, K>) -> Result<Self, QueryError> {
        let next = match action {
            QueryAction::Search(search) => QueryState {
                search,
                page: 1,
                ..self
            },
            QueryAction::FilterCategory(category) => QueryState {
                category,
                page: 1,
                ..self
            },
            QueryAction::FilterDate(date) => QueryState {
                date,
                page: 1,
                ..self
            },
            QueryAction::SortBy(column) => QueryState {
                sort: self.sort.select(column),
                ..self
            },
            QueryAction::GoToPage(0) => return Err(QueryError::InvalidPage(0)),
            QueryAction::GoToPage(page) => QueryState { page, ..self },
            QueryAction::NextPage => QueryState {
                page: self.page.saturating_add(1),
                ..self
            },
            QueryAction::PreviousPage => QueryState {
                page: self.page.saturating_sub(1).max(1),
                ..self
            },
            QueryAction::SetPageSize(size) => {
                if !PAGE_SIZE_OPTIONS.contains(&size) {
                    return Err(QueryError::UnsupportedPageSize {
                        size,
                        options: PAGE_SIZE_OPTIONS,
                    });
                }
                QueryState {
                    page_size: size,
                    page: 1,
                    ..self
                }
            }
            QueryAction::ClearFilters => QueryState {
                search: String::new(),
                category: None,
                date: None,
                page: 1,
                ..self
            },
        };
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Q = QueryState<&'static str, u8>;

    #[test]
    fn filter_changes_reset_page() {
        let q = Q::new(SortState::ascending("value"))
            .reduce(QueryAction::GoToPage(3))
            .unwrap();
        assert_eq!(q.page, 3);
        let q = q.reduce(QueryAction::Search("app".into())).unwrap();
        assert_eq!(q.page, 1);
        let q = q
            .reduce(QueryAction::GoToPage(2))
            .unwrap()
            .reduce(QueryAction::FilterCategory(Some(1)))
            .unwrap();
        assert_eq!(q.page, 1);
    }

    #[test]
    fn sorting_keeps_page() {
        let q = Q::new(SortState::ascending("value"))
            .reduce(QueryAction::GoToPage(2))
            .unwrap()
            .reduce(QueryAction::SortBy("asset"))
            .unwrap();
        assert_eq!(q.page, 2);
        assert_eq!(q.sort, SortState::ascending("asset"));
    }

    #[test]
    fn previous_page_stops_at_one() {
        let q = Q::new(SortState::ascending("value"))
            .reduce(QueryAction::PreviousPage)
            .unwrap();
        assert_eq!(q.page, 1);
    }

    #[test]
    fn rejects_page_zero_and_odd_page_sizes() {
        let q = Q::new(SortState::ascending("value"));
        assert_eq!(
            q.clone().reduce(QueryAction::GoToPage(0)),
            Err(QueryError::InvalidPage(0))
        );
        assert!(matches!(
            q.reduce(QueryAction::SetPageSize(7)),
            Err(QueryError::UnsupportedPageSize { size: 7, .. })
        ));
    }
}
