// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use super::AppState;
use crate::brief::Brief;
use crate::error::{CopysmithError, Result};
use crate::history::HistoryEntry;

pub(super) async fn get_history(State(state): State<AppState>) -> Json<Vec<Value>> {
    Json(state.service.history().load())
}

pub(super) async fn generate(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<HistoryEntry>> {
    // Unavailability wins over a malformed body
    if !state.service.is_available() {
        return Err(CopysmithError::ModelUnavailable);
    }

    let Json(value) = payload.map_err(|e| CopysmithError::InvalidInput(e.body_text()))?;
    let brief = Brief::from_json(value)?;

    let entry = state.service.generate(brief).await?;
    Ok(Json(entry))
}
