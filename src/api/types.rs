// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Response shapes of the `/api/*` endpoints.
//!
//! Each type mirrors one JSON payload field for field. Values are received,
//! structurally trusted and handed to callers as-is.

use serde::{Deserialize, Serialize};

/// One row of the photograph listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotographSummary {
    pub photograph_id: i64,
    pub captured_at: String,
    pub image_path: String,
    pub keep_all: bool,
    pub detection_count: i64,
}

/// A single detector hit on one tile of a photograph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub tile_index: i64,
    /// Detector certainty, 0.0 - 1.0
    pub confidence: f64,
    pub tile_url: String,
}

/// A photograph with its resolved image URL and every detection, in server order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotographDetail {
    pub photograph_id: i64,
    pub captured_at: String,
    pub image_url: String,
    pub keep_all: bool,
    pub detections: Vec<Detection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_photographs: i64,
    pub total_detections: i64,
}

/// Outcome of a manual capture. `photograph_id` is null when nothing was saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShootResponse {
    pub photograph_id: Option<i64>,
    pub message: String,
}

impl PhotographSummary {
    pub fn has_detections(&self) -> bool {
        self.detection_count > 0
    }
}

impl PhotographDetail {
    pub fn detection_count(&self) -> usize {
        self.detections.len()
    }

    /// Detection with the highest confidence, if any
    pub fn best_detection(&self) -> Option<&Detection> {
        self.detections
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }
}

impl ShootResponse {
    pub fn is_saved(&self) -> bool {
        self.photograph_id.is_some()
    }
}
