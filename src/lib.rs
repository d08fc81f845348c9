// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod panels;
pub mod performance;
pub mod render;
pub mod seed;
pub mod table;
pub mod toast;
pub mod utils;
pub mod validation;
