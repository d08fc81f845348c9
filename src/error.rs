// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Page numbers start at 1 (got {0})")]
    InvalidPage(usize),

    #[error("Unsupported page size {size} (choose one of {options:?})")]
    UnsupportedPageSize {
        size: usize,
        options: &'static [usize],
    },

    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    #[error("Unknown {kind} '{value}'")]
    UnknownCategory { kind: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}' (type 'help')")]
    Unknown(String),

    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("'{command}' is not available on the {panel} panel")]
    NotApplicable { command: String, panel: String },

    #[error("No {kind} with id {id}")]
    NotFound { kind: &'static str, id: i64 },

    #[error(transparent)]
    Query(#[from] QueryError),
}
