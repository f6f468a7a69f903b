//! Remote Rename Capability
//!
//! Client for the remote storage service's rename endpoint. The service is a
//! black box here: one opaque session cookie in, rename calls out, any
//! failure is reported uniformly.

use crate::error::{RemoteError, SetupError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Remote filesystem rename seam. The production implementation talks HTTP;
/// tests substitute scripted fakes.
#[async_trait]
pub trait RemoteFs {
    async fn rename(&self, old_path: &str, new_path: &str) -> Result<(), RemoteError>;
}

/// Read the opaque session cookie the remote client authenticates with.
pub fn read_cookies(path: &Path) -> Result<String, SetupError> {
    std::fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .map_err(|e| SetupError::Credentials {
            path: path.to_path_buf(),
            source: e,
        })
}

#[derive(Debug, Deserialize)]
struct RenameResponse {
    state: bool,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the remote storage service. Built once per run; the
/// session is reused for every call.
pub struct CloudClient {
    http: Client,
    endpoint: String,
    cookie: String,
}

impl CloudClient {
    pub fn new(endpoint: String, cookie: String) -> Result<Self, SetupError> {
        let http = Client::builder().build().map_err(SetupError::Client)?;
        Ok(Self {
            http,
            endpoint,
            cookie,
        })
    }
}

#[async_trait]
impl RemoteFs for CloudClient {
    async fn rename(&self, old_path: &str, new_path: &str) -> Result<(), RemoteError> {
        debug!(old_path, new_path, "sending rename request");
        let response = self
            .http
            .post(&self.endpoint)
            .header(reqwest::header::COOKIE, &self.cookie)
            .form(&[("old_path", old_path), ("new_path", new_path)])
            .send()
            .await?
            .error_for_status()?;

        let body: RenameResponse = response.json().await?;
        if body.state {
            Ok(())
        } else {
            Err(RemoteError::Rejected(
                body.error
                    .unwrap_or_else(|| "unspecified failure".to_string()),
            ))
        }
    }
}
