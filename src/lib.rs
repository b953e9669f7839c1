// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Copysmith - marketing content generator.
//!
//! A small HTTP backend that accepts marketing briefs, asks Gemini for
//! content and keeps every result in a flat-file history log.
//!
//! Architecture highlights:
//! - `brief`, `prompt`: the request fields and the fixed prompt template
//! - `llm`: generator abstraction, Gemini provider, mock for tests
//! - `history`: JSON history document, newest entry first
//! - `generation`: orchestration of prompt, generator and history
//! - `server`: axum routes for `/history` and `/generate`

pub mod brief;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod history;
pub mod llm;
pub mod prompt;
pub mod server;

pub use error::{CopysmithError, Result};
