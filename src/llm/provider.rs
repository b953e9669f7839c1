// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Text generation trait
//!
//! Defines the abstraction layer over remote generation backends.

use async_trait::async_trait;

use crate::error::Result;

/// A service that turns a prompt into text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Get the provider name (e.g., "gemini")
    fn name(&self) -> &str;

    /// Model identifier used for every request
    fn model(&self) -> &str;

    /// Generate text for a single prompt.
    ///
    /// Runs to completion or error; there is no retry.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
