// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The serialized artifacts document.
//!
//! Every remote (and the local store) exchanges the same JSON document: a
//! schema marker, a version, and the ordered artifact list. Fields this
//! version does not understand are kept in `extra` and written back out, so
//! an older client never strips data a newer client added.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::artifact::Artifact;
use crate::error::{Error, Result};

/// Schema marker written into every document.
pub const SCHEMA: &str = "artisync/artifacts";

/// Highest document version this build writes.
pub const VERSION: u32 = 1;

fn default_schema() -> String {
    SCHEMA.to_string()
}

/// Versioned container for an ordered artifact sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default = "default_schema")]
    pub schema: String,
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
    pub artifacts: Vec<Artifact>,
    /// Top-level fields from newer writers.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// Creates a current-version document holding `artifacts` in order.
    pub fn new(artifacts: Vec<Artifact>) -> Self {
        Document {
            schema: SCHEMA.to_string(),
            version: VERSION,
            exported_at: None,
            artifacts,
            extra: Map::new(),
        }
    }

    /// Sets the unknown top-level fields to carry along.
    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = extra;
        self
    }

    /// Stamps the document with its export time.
    pub fn exported(mut self, at: DateTime<Utc>) -> Self {
        self.exported_at = Some(at);
        self
    }

    /// Parses and validates a serialized document.
    ///
    /// Fails with [`Error::Decode`] on malformed JSON, a foreign schema
    /// marker, version 0, or duplicate artifact ids. Nothing is partially
    /// returned.
    pub fn decode(blob: &str) -> Result<Self> {
        let doc: Document =
            serde_json::from_str(blob).map_err(|e| Error::Decode(e.to_string()))?;

        if doc.schema != SCHEMA {
            return Err(Error::Decode(format!(
                "unexpected schema '{}' (expected '{}')",
                doc.schema, SCHEMA
            )));
        }
        if doc.version == 0 {
            return Err(Error::Decode("unsupported document version 0".into()));
        }
        if doc.version > VERSION {
            tracing::warn!(
                version = doc.version,
                supported = VERSION,
                "document written by a newer client, unknown fields will be preserved"
            );
        }

        let mut seen = HashSet::new();
        for artifact in &doc.artifacts {
            if !seen.insert(artifact.id.as_str()) {
                return Err(Error::Decode(format!(
                    "duplicate artifact id '{}'",
                    artifact.id
                )));
            }
        }

        Ok(doc)
    }

    /// Serializes the document as pretty-printed JSON.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
