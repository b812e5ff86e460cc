// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core artifact types.
//!
//! An [`Artifact`] is a named, typed configuration document (a rewrite rule,
//! a script, a header filter...). The repository never looks inside
//! `content`; it only cares about identity, order and the enabled flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Classification of artifacts by what the proxy engine does with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactType {
    /// URL rewrite rules.
    Rewrite,
    /// Redirect rules.
    Redirect,
    /// Script bodies run against matched traffic.
    Script,
    /// Routing rule sets.
    Rule,
    /// Filter lists.
    Filter,
    /// Header modification rules.
    Header,
}

impl ArtifactType {
    /// All artifact types, in display order.
    pub const ALL: [ArtifactType; 6] = [
        ArtifactType::Rewrite,
        ArtifactType::Redirect,
        ArtifactType::Script,
        ArtifactType::Rule,
        ArtifactType::Filter,
        ArtifactType::Header,
    ];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactType::Rewrite => "rewrite",
            ArtifactType::Redirect => "redirect",
            ArtifactType::Script => "script",
            ArtifactType::Rule => "rule",
            ArtifactType::Filter => "filter",
            ArtifactType::Header => "header",
        }
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArtifactType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "rewrite" => Ok(ArtifactType::Rewrite),
            "redirect" => Ok(ArtifactType::Redirect),
            "script" => Ok(ArtifactType::Script),
            "rule" => Ok(ArtifactType::Rule),
            "filter" => Ok(ArtifactType::Filter),
            "header" => Ok(ArtifactType::Header),
            _ => Err(Error::InvalidArtifactType(s.to_string())),
        }
    }
}

fn default_enabled() -> bool {
    true
}

/// A named configuration document managed by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Unique identifier, immutable after creation.
    pub id: String,
    /// Display name. Not required to be unique.
    pub name: String,
    /// What kind of document this is.
    #[serde(rename = "type")]
    pub artifact_type: ArtifactType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Disabled artifacts stay local and are left out of uploads.
    #[serde(default = "default_enabled")]
    pub is_enabled: bool,
    /// Opaque body (rule or script source).
    #[serde(default)]
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation.
    pub updated_at: DateTime<Utc>,
    /// Fields written by other clients that this version does not know about.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Artifact {
    /// Creates an enabled artifact with no description.
    pub fn new(
        id: String,
        name: String,
        artifact_type: ArtifactType,
        content: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Artifact {
            id,
            name,
            artifact_type,
            description: None,
            is_enabled: true,
            content,
            created_at,
            updated_at: created_at,
            extra: Map::new(),
        }
    }

    /// Checks the fields the repository requires before accepting a save.
    pub fn validate(&self) -> Result<()> {
        if !crate::id::validate_id(&self.id) {
            return Err(Error::Validation(format!(
                "artifact id '{}' must be non-empty and contain no whitespace",
                self.id
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation("artifact name cannot be empty".into()));
        }
        Ok(())
    }

    /// Marks the artifact as modified at `now`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    /// Builds an independent copy under a new identity.
    ///
    /// Body, type, description and the enabled flag are copied; timestamps
    /// start fresh and unknown fields are not carried over.
    pub fn duplicate_as(&self, id: String, name: String, now: DateTime<Utc>) -> Artifact {
        Artifact {
            id,
            name,
            artifact_type: self.artifact_type,
            description: self.description.clone(),
            is_enabled: self.is_enabled,
            content: self.content.clone(),
            created_at: now,
            updated_at: now,
            extra: Map::new(),
        }
    }
}

/// Derives the display name for a copy of `name`.
///
/// Returns `"<name> copy"`, or `"<name> copy N"` (N starting at 2) when that
/// name is already used by one of `existing`.
pub fn copy_name<'a, I>(name: &str, existing: I) -> String
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    let taken = |candidate: &str| existing.clone().into_iter().any(|n| n == candidate);

    let base = format!("{} copy", name.trim());
    if !taken(&base) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{} {}", base, n);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
#[path = "artifact_tests.rs"]
mod tests;
