// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod config;
pub mod format;
pub mod transport;

pub use api::{
    ClientError, Detection, Operation, PhotographDetail, PhotographSummary, PiskyClient,
    ShootResponse, Stats, DEFAULT_PHOTOGRAPH_LIMIT,
};
pub use config::{ClientConfig, ConfigError};
pub use format::format_date;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, ReqwestTransport, TransportError};
