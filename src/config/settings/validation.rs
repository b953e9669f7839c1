// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::error::{CopysmithError, Result};

use super::Settings;

impl Settings {
    /// Get the API key for Gemini, checking env var first.
    ///
    /// Blank values count as unset.
    pub fn get_gemini_api_key(&self) -> Option<String> {
        // Priority: env var > config file.
        std::env::var(&self.gemini.api_key_env)
            .ok()
            .or_else(|| self.gemini.api_key.clone())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }

    /// Whether a generation capability can be built from these settings.
    pub fn is_generation_configured(&self) -> bool {
        self.get_gemini_api_key().is_some()
    }

    /// Reject settings the server cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(CopysmithError::Config("server.host is empty".to_string()));
        }
        if self.history.path.as_os_str().is_empty() {
            return Err(CopysmithError::Config("history.path is empty".to_string()));
        }
        if self.gemini.model.trim().is_empty() {
            return Err(CopysmithError::Config("gemini.model is empty".to_string()));
        }
        if self.gemini.request_timeout_secs == Some(0) {
            return Err(CopysmithError::Config(
                "gemini.request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
