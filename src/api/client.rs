// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Typed client for the Pi in the Sky `/api/*` endpoints

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::{ClientError, Operation};
use super::types::{PhotographDetail, PhotographSummary, ShootResponse, Stats};
use crate::config::ClientConfig;
use crate::transport::{resolve_url, ApiRequest, ApiResponse, HttpTransport, ReqwestTransport};

/// Page size used when the caller does not pick one
pub const DEFAULT_PHOTOGRAPH_LIMIT: i64 = 50;

/// URL prefix under which the server publishes photographs and tiles
pub const IMAGES_PREFIX: &str = "/images/";

/// Server URL for a summary's `image_path`
pub fn image_path_url(image_path: &str) -> String {
    format!("{}{}", IMAGES_PREFIX, image_path.trim_start_matches('/'))
}

pub struct PiskyClient<T = ReqwestTransport> {
    transport: T,
    base_url: String,
}

impl PiskyClient<ReqwestTransport> {
    /// Client backed by reqwest, bound to `config.api_url`
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let transport =
            ReqwestTransport::new(config).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        Ok(Self::new(transport, &config.api_url))
    }
}

impl<T: HttpTransport> PiskyClient<T> {
    pub fn new(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Most recent photographs, newest first, at most `limit` rows
    pub async fn get_photographs(&self, limit: i64) -> Result<Vec<PhotographSummary>, ClientError> {
        self.request_json(
            Operation::ListPhotographs,
            ApiRequest::get(format!("/api/photographs?limit={}", limit)),
        )
        .await
    }

    pub async fn get_recent_photographs(&self) -> Result<Vec<PhotographSummary>, ClientError> {
        self.get_photographs(DEFAULT_PHOTOGRAPH_LIMIT).await
    }

    pub async fn get_photograph(&self, id: i64) -> Result<PhotographDetail, ClientError> {
        self.request_json(
            Operation::GetPhotograph,
            ApiRequest::get(format!("/api/photographs/{}", id)),
        )
        .await
    }

    pub async fn get_stats(&self) -> Result<Stats, ClientError> {
        self.request_json(Operation::GetStats, ApiRequest::get("/api/stats"))
            .await
    }

    /// Ask the server to take a photograph now. A failed capture is still a
    /// successful call; it comes back with a null `photograph_id`.
    pub async fn trigger_shoot(&self) -> Result<ShootResponse, ClientError> {
        self.request_json(Operation::TriggerShoot, ApiRequest::post("/api/shoot"))
            .await
    }

    /// Raw bytes of a photograph or tile.
    ///
    /// Accepts an `image_url`/`tile_url` as returned by the API, an absolute
    /// URL, a server path with or without its leading slash, or a bare file
    /// name which is looked up under `/images/`.
    pub async fn fetch_image(&self, target: &str) -> Result<Bytes, ClientError> {
        let path = if target.starts_with('/') || target.contains("://") {
            target.to_string()
        } else if target.contains('/') {
            format!("/{}", target)
        } else {
            image_path_url(target)
        };

        let response = self
            .execute(Operation::FetchImage, ApiRequest::get(path))
            .await?;
        Ok(response.body)
    }

    /// Absolute form of a server-relative URL such as a `tile_url`
    pub fn absolute_url(&self, path: &str) -> Result<String, ClientError> {
        resolve_url(&self.base_url, path)
            .map(|url| url.to_string())
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))
    }

    async fn request_json<R: DeserializeOwned>(
        &self,
        operation: Operation,
        request: ApiRequest,
    ) -> Result<R, ClientError> {
        let response = self.execute(operation, request).await?;
        serde_json::from_slice(&response.body).map_err(|source| {
            warn!("{}: response body did not match: {}", operation, source);
            ClientError::Decode { operation, source }
        })
    }

    async fn execute(
        &self,
        operation: Operation,
        request: ApiRequest,
    ) -> Result<ApiResponse, ClientError> {
        debug!("{}: {} {}", operation, request.method.as_str(), request.path);

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("{} failed: {}", operation, e);
                return Err(ClientError::request_failed(operation));
            }
        };

        if !response.is_success() {
            warn!("{} failed with status {}", operation, response.status);
            return Err(ClientError::request_failed(operation));
        }

        Ok(response)
    }
}
