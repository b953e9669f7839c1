// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Provider factory for creating text generators

use std::sync::Arc;
use std::time::Duration;

use crate::config::Settings;
use crate::error::{CopysmithError, Result};
use crate::llm::provider::TextGenerator;
use crate::llm::providers::GeminiProvider;

/// Factory for creating text generators
pub struct ProviderFactory;

impl ProviderFactory {
    /// Build the generator the server should use, if one can be configured.
    ///
    /// A missing API key is not an error: the server still runs, and every
    /// generation request reports the model as unavailable.
    pub fn from_settings(settings: &Settings) -> Result<Option<Arc<dyn TextGenerator>>> {
        if !settings.is_generation_configured() {
            tracing::warn!(
                api_key_env = %settings.gemini.api_key_env,
                "No Gemini API key found, content generation is disabled"
            );
            return Ok(None);
        }

        Self::create_gemini(settings).map(Some)
    }

    /// Create a Gemini provider
    pub fn create_gemini(settings: &Settings) -> Result<Arc<dyn TextGenerator>> {
        let api_key = settings.get_gemini_api_key().ok_or_else(|| {
            CopysmithError::Config(format!(
                "No Gemini API key found. Set {} env var or gemini.api_key in settings.",
                settings.gemini.api_key_env
            ))
        })?;

        let config = &settings.gemini;
        let mut provider = match config.base_url {
            Some(ref base_url) => GeminiProvider::with_base_url(api_key, &config.model, base_url),
            None => GeminiProvider::new(api_key, &config.model),
        };

        if let Some(secs) = config.request_timeout_secs {
            provider = provider.with_timeout(Duration::from_secs(secs))?;
        }

        tracing::info!(model = %config.model, "Gemini generator configured");
        Ok(Arc::new(provider))
    }
}
