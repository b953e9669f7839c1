// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Content generation
//!
//! Turns a brief into a prompt, asks the generator for text and records the
//! result in the history log.

use std::sync::Arc;
use std::time::Instant;

use crate::brief::Brief;
use crate::error::{CopysmithError, Result};
use crate::history::{HistoryEntry, HistoryStore};
use crate::llm::provider::TextGenerator;
use crate::prompt::build_prompt;

/// Generation service shared by every request
pub struct GenerationService {
    /// `None` when no generator could be configured at startup
    generator: Option<Arc<dyn TextGenerator>>,
    history: Arc<HistoryStore>,
}

impl GenerationService {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, history: Arc<HistoryStore>) -> Self {
        Self { generator, history }
    }

    /// Whether generation requests can be served
    pub fn is_available(&self) -> bool {
        self.generator.is_some()
    }

    /// The history log backing this service
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Generate content for `brief` and record it.
    ///
    /// The history is only touched when generation succeeds.
    pub async fn generate(&self, brief: Brief) -> Result<HistoryEntry> {
        let generator = self
            .generator
            .as_ref()
            .ok_or(CopysmithError::ModelUnavailable)?;

        if brief.is_blank() {
            tracing::debug!("Brief has no fields set, generating from an empty template");
        }

        let prompt = build_prompt(&brief);
        let started = Instant::now();

        let output = match generator.generate(&prompt).await {
            Ok(output) => output,
            Err(e) => {
                let transient = matches!(&e, CopysmithError::Api(api) if api.is_transient());
                tracing::warn!(
                    provider = generator.name(),
                    model = generator.model(),
                    transient,
                    error = %e,
                    "Generation failed"
                );
                return Err(e);
            }
        };

        tracing::info!(
            provider = generator.name(),
            model = generator.model(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            output_chars = output.chars().count(),
            "Generated content"
        );

        let entry = HistoryEntry::new(brief, output);
        self.history.prepend(&entry).await;
        Ok(entry)
    }
}
