// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! GitLab Snippet adapter.

use std::sync::Mutex;
use std::time::Duration;

use serde::Deserialize;
use serde_json::{json, Value};

use super::http::{client, ensure_ok, send_error};
use super::{RemoteAdapter, RemoteFuture, WriteReceipt};
use crate::config::GitLabCredentials;
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct SnippetResponse {
    /// GitLab returns a number; older self-hosted versions have returned strings.
    id: Value,
}

/// Reads and writes the document in a private GitLab snippet.
pub struct SnippetAdapter {
    creds: GitLabCredentials,
    client: reqwest::Client,
    timeout: Duration,
    snippet_id: Mutex<Option<String>>,
}

impl SnippetAdapter {
    pub fn new(creds: GitLabCredentials, timeout: Duration) -> Result<Self> {
        let snippet_id = Mutex::new(creds.snippet_id.clone());
        Ok(SnippetAdapter {
            client: client(timeout)?,
            creds,
            timeout,
            snippet_id,
        })
    }

    /// The snippet currently targeted, if one exists yet.
    pub fn snippet_id(&self) -> Option<String> {
        self.snippet_id
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn api(&self, path: &str) -> String {
        format!("{}/api/v4{}", self.creds.host.trim_end_matches('/'), path)
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header("PRIVATE-TOKEN", &self.creds.token)
    }

    async fn fetch(&self, id: &str) -> Result<String> {
        let resp = self
            .request(
                reqwest::Method::GET,
                &self.api(&format!("/snippets/{}/raw", id)),
            )
            .send()
            .await
            .map_err(|e| send_error(e, self.timeout))?;
        ensure_ok(resp, "snippet")
            .await?
            .text()
            .await
            .map_err(|e| send_error(e, self.timeout))
    }

    async fn update(&self, id: &str, blob: String) -> Result<WriteReceipt> {
        let body = json!({
            "files": [{
                "action": "update",
                "file_path": self.creds.file_name,
                "content": blob,
            }]
        });
        let resp = self
            .request(reqwest::Method::PUT, &self.api(&format!("/snippets/{}", id)))
            .json(&body)
            .send()
            .await
            .map_err(|e| send_error(e, self.timeout))?;
        ensure_ok(resp, "snippet").await?;
        Ok(WriteReceipt::default())
    }

    async fn create(&self, blob: String) -> Result<WriteReceipt> {
        let body = json!({
            "title": "artisync artifacts",
            "visibility": "private",
            "files": [{
                "file_path": self.creds.file_name,
                "content": blob,
            }]
        });
        let resp = self
            .request(reqwest::Method::POST, &self.api("/snippets"))
            .json(&body)
            .send()
            .await
            .map_err(|e| send_error(e, self.timeout))?;
        let created: SnippetResponse = ensure_ok(resp, "snippet")
            .await?
            .json()
            .await
            .map_err(|e| Error::Decode(format!("unexpected snippet response: {}", e)))?;

        let id = match created.id {
            Value::String(s) => s,
            other => other.to_string(),
        };
        tracing::info!(snippet_id = %id, "created snippet for artifacts");
        *self.snippet_id.lock().unwrap_or_else(|e| e.into_inner()) = Some(id.clone());
        Ok(WriteReceipt { created: Some(id) })
    }
}

impl RemoteAdapter for SnippetAdapter {
    fn is_configured(&self) -> bool {
        !self.creds.token.is_empty()
    }

    fn describe(&self) -> String {
        match self.snippet_id() {
            Some(id) => format!("gitlab snippet {} on {}", id, self.creds.host),
            None => format!("gitlab snippet on {} (created on first upload)", self.creds.host),
        }
    }

    fn read(&self) -> RemoteFuture<'_, String> {
        Box::pin(async move {
            let id = self.snippet_id().ok_or_else(|| {
                Error::NotConfigured("no snippet id yet; upload once or set gitlab.id".into())
            })?;
            self.fetch(&id).await
        })
    }

    fn write(&self, blob: String) -> RemoteFuture<'_, WriteReceipt> {
        Box::pin(async move {
            match self.snippet_id() {
                Some(id) => self.update(&id, blob).await,
                None => self.create(blob).await,
            }
        })
    }
}

#[cfg(test)]
#[path = "snippet_tests.rs"]
mod tests;
