// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for Copysmith
//!
//! Handles loading settings from ~/.copysmith/settings.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod io;
mod validation;

/// Main settings structure, stored in ~/.copysmith/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// History log settings
    #[serde(default)]
    pub history: HistoryConfig,

    /// Gemini generation settings
    #[serde(default)]
    pub gemini: GeminiConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allow cross-origin requests from any origin
    #[serde(default = "default_cors")]
    pub cors: bool,
}

/// History log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Path of the JSON history document
    #[serde(default = "default_history_path")]
    pub path: PathBuf,
}

/// Gemini-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key (if stored directly, not recommended)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Environment variable name for API key
    #[serde(default = "default_gemini_api_key_env")]
    pub api_key_env: String,

    /// Model to use
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// Base URL for API (for custom endpoints)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Request timeout in seconds; no timeout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_cors() -> bool {
    true
}

fn default_history_path() -> PathBuf {
    PathBuf::from("history_db.json")
}

fn default_gemini_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: default_cors(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_history_path(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: default_gemini_api_key_env(),
            model: default_gemini_model(),
            base_url: None,
            request_timeout_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 5000);
        assert!(settings.server.cors);
        assert_eq!(settings.history.path, PathBuf::from("history_db.json"));
        assert_eq!(settings.gemini.api_key_env, "GEMINI_API_KEY");
        assert_eq!(settings.gemini.model, "gemini-2.5-flash");
        assert!(settings.gemini.api_key.is_none());
        assert!(settings.gemini.base_url.is_none());
        assert!(settings.gemini.request_timeout_secs.is_none());
    }

    #[test]
    fn test_settings_partial_json() {
        let json = r#"{"server": {"port": 8080}, "gemini": {"model": "gemini-2.0-flash"}}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.gemini.model, "gemini-2.0-flash");
        assert_eq!(settings.gemini.api_key_env, "GEMINI_API_KEY");
        assert_eq!(settings.history.path, PathBuf::from("history_db.json"));
    }

    #[test]
    fn test_settings_empty_json() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.server.port, 5000);
    }

    #[test]
    fn test_settings_serialization_skips_unset_key() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(!json.contains("api_key\""));
        assert!(!json.contains("base_url"));

        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.gemini.model, "gemini-2.5-flash");
    }
}
