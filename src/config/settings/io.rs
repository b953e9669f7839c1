// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::{Path, PathBuf};

use crate::error::Result;

use super::Settings;

impl Settings {
    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::copysmith_home().join("settings.json")
    }

    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Get the copysmith home directory (~/.copysmith or $COPYSMITH_HOME).
    pub fn copysmith_home() -> PathBuf {
        if let Ok(home) = std::env::var("COPYSMITH_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".copysmith")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CopysmithError;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_from(&temp_dir.path().join("settings.json")).unwrap();
        assert_eq!(settings.server.port, 5000);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"history": {"path": "/var/lib/copysmith/history.json"}}"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(
            settings.history.path,
            PathBuf::from("/var/lib/copysmith/history.json")
        );
    }

    #[test]
    fn test_load_from_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, CopysmithError::Json(_)));
    }

    #[test]
    fn test_default_path_is_under_home() {
        let path = Settings::default_path();
        assert!(path.ends_with("settings.json"));
        assert_eq!(path.parent().unwrap(), Settings::copysmith_home());
    }
}
