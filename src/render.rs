// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Terminal widgets. Each [`Widget`] variant is drawn by the function
//! registered for its [`WidgetKind`] in [`RENDERERS`].

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::toast::Toast;
use crate::utils::pretty_table;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub detail: Option<String>,
}

impl StatCard {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        StatCard {
            label: label.into(),
            value: value.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub pct: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        footer: Option<String>,
    },
    StatCards(Vec<StatCard>),
    EmptyState {
        title: String,
        hint: String,
    },
    Toast(Toast),
    Banner {
        title: String,
        message: String,
    },
    Allocation(Vec<Slice>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Table,
    StatCards,
    EmptyState,
    Toast,
    Banner,
    Allocation,
}

impl Widget {
    pub fn kind(&self) -> WidgetKind {
        match self {
            Widget::Table { .. } => WidgetKind::Table,
            Widget::StatCards(_) => WidgetKind::StatCards,
            Widget::EmptyState { .. } => WidgetKind::EmptyState,
            Widget::Toast(_) => WidgetKind::Toast,
            Widget::Banner { .. } => WidgetKind::Banner,
            Widget::Allocation(_) => WidgetKind::Allocation,
        }
    }

    pub fn table(headers: &[&str], rows: Vec<Vec<String>>, footer: Option<String>) -> Self {
        Widget::Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
            footer,
        }
    }
}

type Renderer = fn(&Widget) -> String;

pub static RENDERERS: Lazy<HashMap<WidgetKind, Renderer>> = Lazy::new(|| {
    let mut m: HashMap<WidgetKind, Renderer> = HashMap::new();
    m.insert(WidgetKind::Table, render_table);
    m.insert(WidgetKind::StatCards, render_stat_cards);
    m.insert(WidgetKind::EmptyState, render_empty_state);
    m.insert(WidgetKind::Toast, render_toast);
    m.insert(WidgetKind::Banner, render_banner);
    m.insert(WidgetKind::Allocation, render_allocation);
    m
});

pub fn render(widget: &Widget) -> String {
    match RENDERERS.get(&widget.kind()) {
        Some(draw) => draw(widget),
        None => String::new(),
    }
}

pub fn render_all(widgets: &[Widget]) -> String {
    widgets
        .iter()
        .map(render)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_table(widget: &Widget) -> String {
    let Widget::Table {
        headers,
        rows,
        footer,
    } = widget
    else {
        return String::new();
    };
    let headers: Vec<&str> = headers.iter().map(String::as_str).collect();
    let mut out = pretty_table(&headers, rows.clone()).to_string();
    if let Some(footer) = footer {
        out.push('\n');
        out.push_str(footer);
    }
    out
}

fn render_stat_cards(widget: &Widget) -> String {
    let Widget::StatCards(cards) = widget else {
        return String::new();
    };
    let headers: Vec<&str> = cards.iter().map(|c| c.label.as_str()).collect();
    let mut values = Vec::with_capacity(cards.len());
    let mut details = Vec::with_capacity(cards.len());
    for c in cards {
        values.push(c.value.clone());
        details.push(c.detail.clone().unwrap_or_default());
    }
    let mut rows = vec![values];
    if details.iter().any(|d| !d.is_empty()) {
        rows.push(details);
    }
    pretty_table(&headers, rows).to_string()
}

fn render_empty_state(widget: &Widget) -> String {
    let Widget::EmptyState { title, hint } = widget else {
        return String::new();
    };
    format!("{}\n  {}", title, hint)
}

fn render_toast(widget: &Widget) -> String {
    let Widget::Toast(toast) = widget else {
        return String::new();
    };
    format!("» {}: {}", toast.title, toast.description)
}

fn render_banner(widget: &Widget) -> String {
    let Widget::Banner { title, message } = widget else {
        return String::new();
    };
    format!("== {} ==\n{}", title, message)
}

const BAR_WIDTH: u32 = 40;

fn render_allocation(widget: &Widget) -> String {
    let Widget::Allocation(slices) = widget else {
        return String::new();
    };
    let label_width = slices.iter().map(|s| s.label.len()).max().unwrap_or(0);
    slices
        .iter()
        .map(|s| {
            let filled = (s.pct * Decimal::from(BAR_WIDTH) / Decimal::ONE_HUNDRED)
                .round()
                .to_usize()
                .unwrap_or(0)
                .min(BAR_WIDTH as usize);
            format!(
                "{:<width$}  {:<bar$}  {:>6.2}%",
                s.label,
                "█".repeat(filled),
                s.pct.round_dp(2),
                width = label_width,
                bar = BAR_WIDTH as usize,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_renderer() {
        for kind in [
            WidgetKind::Table,
            WidgetKind::StatCards,
            WidgetKind::EmptyState,
            WidgetKind::Toast,
            WidgetKind::Banner,
            WidgetKind::Allocation,
        ] {
            assert!(RENDERERS.contains_key(&kind));
        }
    }

    #[test]
    fn toast_and_empty_state_render_plain_text() {
        let t = Widget::Toast(Toast::new("Alert dismissed", "Price Target"));
        assert_eq!(render(&t), "» Alert dismissed: Price Target");
        let e = Widget::EmptyState {
            title: "No holdings found".into(),
            hint: "Try clearing filters".into(),
        };
        assert!(render(&e).starts_with("No holdings found"));
    }

    #[test]
    fn table_contains_cells() {
        let w = Widget::table(&["Ticker"], vec![vec!["AAPL".into()]], Some("1 of 1".into()));
        let out = render(&w);
        assert!(out.contains("AAPL"));
        assert!(out.ends_with("1 of 1"));
    }
}
