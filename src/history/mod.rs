// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! History log of generated content
//!
//! Every successful generation is recorded, newest first, in a single
//! JSON document.

pub mod store;

pub use store::{HistoryEntry, HistoryStore};
