// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use artisync_core::Artifact;

use crate::colors::{self, codes};

/// Format a one-line list entry.
///
/// Output format:
/// ```text
///   1. [rewrite] Strip tracking (art-1a2b3c4d)
///   2. [script] Dark mode (art-9f8e7d6c) disabled
/// ```
pub fn format_artifact_line(position: usize, artifact: &Artifact, color: bool) -> String {
    let line = format!(
        "{:>3}. [{}] {} ({})",
        position, artifact.artifact_type, artifact.name, artifact.id
    );
    if artifact.is_enabled {
        line
    } else {
        colors::paint(codes::MUTED, &format!("{} disabled", line), color)
    }
}

/// Format the full view of one artifact, content included.
pub fn format_artifact_details(artifact: &Artifact) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "[{}] {}\n",
        artifact.artifact_type, artifact.name
    ));
    out.push_str(&format!("ID: {}\n", artifact.id));
    out.push_str(&format!(
        "Enabled: {}\n",
        if artifact.is_enabled { "yes" } else { "no" }
    ));
    out.push_str(&format!(
        "Created: {}\n",
        artifact.created_at.format("%Y-%m-%d %H:%M")
    ));
    out.push_str(&format!(
        "Updated: {}\n",
        artifact.updated_at.format("%Y-%m-%d %H:%M")
    ));

    if let Some(desc) = artifact.description.as_deref().filter(|d| !d.is_empty()) {
        out.push_str("\nDescription:\n");
        out.push_str(&indent(desc));
    }

    out.push_str("\nContent:\n");
    if artifact.content.is_empty() {
        out.push_str("    (empty)\n");
    } else {
        out.push_str(&indent(&artifact.content));
    }
    out
}

/// Indent every line by four spaces, ending with a newline.
fn indent(text: &str) -> String {
    text.lines().map(|l| format!("    {}\n", l)).collect()
}

/// Pluralize "artifact".
pub fn artifacts_noun(count: usize) -> &'static str {
    if count == 1 {
        "artifact"
    } else {
        "artifacts"
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
