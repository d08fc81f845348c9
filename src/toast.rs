// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;
use tracing::info;

use crate::render::{Widget, render};

/// Transient user feedback. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Toast {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn show(&self) {
        info!(title = %self.title, description = %self.description, "toast");
        println!("{}", render(&Widget::Toast(self.clone())));
    }
}
