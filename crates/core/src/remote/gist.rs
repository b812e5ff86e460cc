// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! GitHub Gist adapter.
//!
//! The document lives in a single file of a private gist. When no gist id
//! is configured, the first write creates the gist and reports its id in the
//! [`WriteReceipt`].

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::http::{client, ensure_ok, send_error};
use super::{RemoteAdapter, RemoteFuture, WriteReceipt};
use crate::config::GistCredentials;
use crate::error::{Error, Result};

const API_VERSION: &str = "2022-11-28";
const ACCEPT: &str = "application/vnd.github+json";

#[derive(Debug, Deserialize)]
struct GistResponse {
    id: String,
    #[serde(default)]
    files: HashMap<String, GistFile>,
}

#[derive(Debug, Deserialize)]
struct GistFile {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    truncated: bool,
    #[serde(default)]
    raw_url: Option<String>,
}

/// Reads and writes the document in a GitHub Gist.
pub struct GistAdapter {
    creds: GistCredentials,
    client: reqwest::Client,
    timeout: Duration,
    /// Gist id, filled in after the first write creates the gist.
    gist_id: Mutex<Option<String>>,
}

impl GistAdapter {
    pub fn new(creds: GistCredentials, timeout: Duration) -> Result<Self> {
        let gist_id = Mutex::new(creds.gist_id.clone());
        Ok(GistAdapter {
            client: client(timeout)?,
            creds,
            timeout,
            gist_id,
        })
    }

    /// The gist currently targeted, if one exists yet.
    pub fn gist_id(&self) -> Option<String> {
        self.gist_id
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn set_gist_id(&self, id: String) {
        *self.gist_id.lock().unwrap_or_else(|e| e.into_inner()) = Some(id);
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.creds.api_url.trim_end_matches('/'), path)
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .bearer_auth(&self.creds.token)
            .header("Accept", ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION)
    }

    fn files(&self, blob: String) -> Map<String, Value> {
        let mut files = Map::new();
        files.insert(self.creds.file_name.clone(), json!({ "content": blob }));
        files
    }

    async fn fetch(&self, id: &str) -> Result<String> {
        let resp = self
            .request(reqwest::Method::GET, &self.url(&format!("/gists/{}", id)))
            .send()
            .await
            .map_err(|e| send_error(e, self.timeout))?;
        let gist: GistResponse = ensure_ok(resp, "gist")
            .await?
            .json()
            .await
            .map_err(|e| Error::Decode(format!("unexpected gist response: {}", e)))?;

        let file = gist.files.get(&self.creds.file_name).ok_or_else(|| {
            Error::NotConfigured(format!(
                "gist {} has no file named '{}'",
                gist.id, self.creds.file_name
            ))
        })?;

        // Large files come back truncated; the full body is behind raw_url.
        match (&file.content, file.truncated, &file.raw_url) {
            (Some(content), false, _) => Ok(content.clone()),
            (_, _, Some(raw_url)) => {
                let resp = self
                    .request(reqwest::Method::GET, raw_url)
                    .send()
                    .await
                    .map_err(|e| send_error(e, self.timeout))?;
                ensure_ok(resp, "gist raw file")
                    .await?
                    .text()
                    .await
                    .map_err(|e| send_error(e, self.timeout))
            }
            (Some(content), true, None) => Ok(content.clone()),
            (None, _, None) => Err(Error::Decode(format!(
                "gist file '{}' has no content",
                self.creds.file_name
            ))),
        }
    }

    async fn update(&self, id: &str, blob: String) -> Result<WriteReceipt> {
        let body = json!({ "files": self.files(blob) });
        let resp = self
            .request(reqwest::Method::PATCH, &self.url(&format!("/gists/{}", id)))
            .json(&body)
            .send()
            .await
            .map_err(|e| send_error(e, self.timeout))?;
        ensure_ok(resp, "gist").await?;
        Ok(WriteReceipt::default())
    }

    async fn create(&self, blob: String) -> Result<WriteReceipt> {
        let body = json!({
            "description": "artisync artifacts",
            "public": false,
            "files": self.files(blob),
        });
        let resp = self
            .request(reqwest::Method::POST, &self.url("/gists"))
            .json(&body)
            .send()
            .await
            .map_err(|e| send_error(e, self.timeout))?;
        let gist: GistResponse = ensure_ok(resp, "gist")
            .await?
            .json()
            .await
            .map_err(|e| Error::Decode(format!("unexpected gist response: {}", e)))?;

        tracing::info!(gist_id = %gist.id, "created gist for artifacts");
        self.set_gist_id(gist.id.clone());
        Ok(WriteReceipt {
            created: Some(gist.id),
        })
    }
}

impl RemoteAdapter for GistAdapter {
    fn is_configured(&self) -> bool {
        !self.creds.token.is_empty()
    }

    fn describe(&self) -> String {
        match self.gist_id() {
            Some(id) => format!("gist {}/{}", id, self.creds.file_name),
            None => "gist (created on first upload)".to_string(),
        }
    }

    fn read(&self) -> RemoteFuture<'_, String> {
        Box::pin(async move {
            let id = self.gist_id().ok_or_else(|| {
                Error::NotConfigured("no gist id yet; upload once or set gist.id".into())
            })?;
            self.fetch(&id).await
        })
    }

    fn write(&self, blob: String) -> RemoteFuture<'_, WriteReceipt> {
        Box::pin(async move {
            match self.gist_id() {
                Some(id) => self.update(&id, blob).await,
                None => self.create(blob).await,
            }
        })
    }
}

#[cfg(test)]
#[path = "gist_tests.rs"]
mod tests;
