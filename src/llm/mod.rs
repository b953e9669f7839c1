// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! LLM module for Copysmith
//!
//! Provides abstraction over the remote text generation service.

pub mod factory;
pub mod mock_provider;
pub mod provider;
pub mod providers;

pub use provider::*;
