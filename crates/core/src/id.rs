// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Prefix shared by every generated artifact id.
pub const ID_PREFIX: &str = "art";

/// Generate an artifact ID from name, timestamp and a nonce.
/// Format: art-{hash} where hash is first 8 hex chars of SHA256(name + timestamp + nonce)
pub fn generate_id(name: &str, created_at: &DateTime<Utc>, nonce: u64) -> String {
    let input = format!("{}{}{}", name, created_at.to_rfc3339(), nonce);
    let hash = Sha256::digest(input.as_bytes());
    let short_hash = hex::encode(&hash[..4]); // First 8 hex chars (4 bytes)
    format!("{}-{}", ID_PREFIX, short_hash)
}

/// Generate a unique ID, handling collisions by appending incrementing suffix.
pub fn generate_unique_id<F>(name: &str, created_at: &DateTime<Utc>, exists: F) -> String
where
    F: Fn(&str) -> bool,
{
    let base_id = generate_id(name, created_at, rand::random::<u64>());

    if !exists(&base_id) {
        return base_id;
    }

    let mut suffix = 2;
    loop {
        let id = format!("{}-{}", base_id, suffix);
        if !exists(&id) {
            return id;
        }
        suffix += 1;
    }
}

/// Validate that an id is usable as an artifact key (non-empty, no whitespace).
pub fn validate_id(id: &str) -> bool {
    !id.is_empty() && !id.chars().any(char::is_whitespace)
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
