// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::CopysmithError;

#[derive(Debug, Serialize)]
struct ErrorPayload {
    error: String,
}

impl CopysmithError {
    /// HTTP status reported for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CopysmithError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            CopysmithError::Api(_) | CopysmithError::Http(_) => StatusCode::BAD_GATEWAY,
            CopysmithError::ModelUnavailable
            | CopysmithError::Config(_)
            | CopysmithError::Io(_)
            | CopysmithError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CopysmithError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        }
        let payload = ErrorPayload {
            error: self.to_string(),
        };
        (status, Json(payload)).into_response()
    }
}
