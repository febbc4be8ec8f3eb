// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::fmt;
use thiserror::Error;

/// The API calls the client can make. Each carries the fixed message
/// reported when the call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListPhotographs,
    GetPhotograph,
    GetStats,
    TriggerShoot,
    FetchImage,
}

impl Operation {
    pub fn message(&self) -> &'static str {
        match self {
            Operation::ListPhotographs => "Failed to fetch photographs",
            Operation::GetPhotograph => "Failed to fetch photograph",
            Operation::GetStats => "Failed to fetch stats",
            Operation::TriggerShoot => "Failed to trigger capture",
            Operation::FetchImage => "Failed to fetch image",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::ListPhotographs => "list_photographs",
            Operation::GetPhotograph => "get_photograph",
            Operation::GetStats => "get_stats",
            Operation::TriggerShoot => "trigger_shoot",
            Operation::FetchImage => "fetch_image",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-2xx status or transport failure. Deliberately carries no status
    /// code so callers cannot tell a 404 from a refused connection.
    #[error("{}", .operation.message())]
    RequestFailed { operation: Operation },

    /// 2xx response whose body is not the declared shape
    #[error("Unexpected response body for {operation}: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    pub fn request_failed(operation: Operation) -> Self {
        ClientError::RequestFailed { operation }
    }

    pub fn operation(&self) -> Option<Operation> {
        match self {
            ClientError::RequestFailed { operation } | ClientError::Decode { operation, .. } => {
                Some(*operation)
            }
            ClientError::InvalidUrl(_) => None,
        }
    }

    pub fn is_request_failed(&self) -> bool {
        matches!(self, ClientError::RequestFailed { .. })
    }
}
