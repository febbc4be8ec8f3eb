// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Typed access to the Pi in the Sky bird detection API

pub mod client;
pub mod error;
pub mod types;

pub use client::{image_path_url, PiskyClient, DEFAULT_PHOTOGRAPH_LIMIT, IMAGES_PREFIX};
pub use error::{ClientError, Operation};
pub use types::{Detection, PhotographDetail, PhotographSummary, ShootResponse, Stats};
