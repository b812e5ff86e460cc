// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared HTTP plumbing for the hosted adapters.

use std::time::Duration;

use reqwest::{Response, StatusCode};

use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("artisync/", env!("CARGO_PKG_VERSION"));

/// Longest slice of an error body echoed back in messages.
const BODY_SNIPPET_LEN: usize = 200;

pub(super) fn client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| Error::Config(format!("failed to build http client: {}", e)))
}

/// Maps a transport-level failure (no response received).
pub(super) fn send_error(err: reqwest::Error, timeout: Duration) -> Error {
    if err.is_timeout() {
        Error::timeout(timeout)
    } else {
        Error::network(err.to_string())
    }
}

/// Passes successful responses through and maps the rest onto the error taxonomy.
pub(super) async fn ensure_ok(resp: Response, label: &str) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let rate_limited = resp
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "0");
    let body = resp.text().await.unwrap_or_default();
    let detail = snippet(&body);

    tracing::debug!(%status, label, body = %detail, "remote request failed");

    Err(match status {
        StatusCode::UNAUTHORIZED => Error::Auth(format!("{} rejected the token", label)),
        StatusCode::FORBIDDEN if rate_limited => {
            Error::QuotaExceeded(format!("{} rate limit exhausted", label))
        }
        StatusCode::FORBIDDEN => {
            Error::Auth(format!("{} denied access (token scope?): {}", label, detail))
        }
        StatusCode::NOT_FOUND => Error::NotConfigured(format!("{} not found", label)),
        StatusCode::CONFLICT => Error::Conflict(format!("{}: {}", label, detail)),
        StatusCode::PAYLOAD_TOO_LARGE
        | StatusCode::UNPROCESSABLE_ENTITY
        | StatusCode::TOO_MANY_REQUESTS => {
            Error::QuotaExceeded(format!("{} returned {}: {}", label, status, detail))
        }
        _ => Error::network(format!("{} returned {}: {}", label, status, detail)),
    })
}

fn snippet(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(BODY_SNIPPET_LEN) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
