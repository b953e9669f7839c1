// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! The marketing brief submitted by clients.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CopysmithError, Result};

/// The eight brief fields in template order.
pub const FIELD_NAMES: [&str; 8] = [
    "tujuan",
    "audiens",
    "produk",
    "usp",
    "platform",
    "nada_suara",
    "poin_kunci",
    "cta",
];

/// A content request, kept exactly as the client sent it.
///
/// Members are never rewritten: explicit `null`s, non-string values and
/// unknown keys all serialize back unchanged. Only the prompt reads the
/// eight known fields, through [`Brief::field`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Brief(Map<String, Value>);

impl Brief {
    /// Accept any JSON object as a brief.
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(CopysmithError::InvalidInput(
                "request body must be a JSON object".to_string(),
            )),
        }
    }

    /// The submitted members.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Text substituted into the prompt for `name`.
    ///
    /// Absent and `null` render empty, strings verbatim, anything else as
    /// compact JSON (`5`, `true`, `["a","b"]`).
    pub fn field(&self, name: &str) -> String {
        match self.0.get(name) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Whether none of the eight fields carry a value.
    pub fn is_blank(&self) -> bool {
        FIELD_NAMES
            .iter()
            .all(|name| matches!(self.0.get(*name), None | Some(Value::Null)))
    }
}
