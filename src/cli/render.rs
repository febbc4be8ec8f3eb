// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Plain-text rendering of API responses for the terminal

use crate::api::{
    image_path_url, ClientError, PhotographDetail, PhotographSummary, PiskyClient, ShootResponse,
    Stats,
};
use crate::config::ClientConfig;
use crate::format::format_date;
use crate::transport::HttpTransport;

pub fn photograph_table(photographs: &[PhotographSummary]) -> String {
    if photographs.is_empty() {
        return "No photographs yet\n".to_string();
    }

    let mut out = format!(
        "{:>6}  {:<24}  {:>10}  {:<8}  {}\n",
        "ID", "CAPTURED", "DETECTIONS", "KEEP_ALL", "IMAGE"
    );
    for photo in photographs {
        out.push_str(&format!(
            "{:>6}  {:<24}  {:>10}  {:<8}  {}\n",
            photo.photograph_id,
            format_date(&photo.captured_at),
            photo.detection_count,
            if photo.keep_all { "yes" } else { "no" },
            image_path_url(&photo.image_path),
        ));
    }
    out
}

pub fn photograph_detail<T: HttpTransport>(
    photo: &PhotographDetail,
    client: &PiskyClient<T>,
) -> Result<String, ClientError> {
    let mut out = format!("Photograph #{}\n", photo.photograph_id);
    out.push_str(&format!("  Captured:   {}\n", format_date(&photo.captured_at)));
    out.push_str(&format!("  Image:      {}\n", client.absolute_url(&photo.image_url)?));
    out.push_str(&format!("  Keep all:   {}\n", photo.keep_all));
    out.push_str(&format!("  Detections: {}\n", photo.detection_count()));

    for detection in &photo.detections {
        out.push_str(&format!(
            "    tile {:02}  {:.2}  {}\n",
            detection.tile_index,
            detection.confidence,
            client.absolute_url(&detection.tile_url)?
        ));
    }
    Ok(out)
}

pub fn stats(stats: &Stats) -> String {
    format!(
        "Photographs: {}\nDetections:  {}\n",
        stats.total_photographs, stats.total_detections
    )
}

pub fn shoot_result(response: &ShootResponse) -> String {
    match response.photograph_id {
        Some(id) => format!("✅ {} (photograph #{})\n", response.message, id),
        None => format!("⚠️  {}\n", response.message),
    }
}

pub fn config_info(config: &ClientConfig) -> String {
    format!(
        "Pi in the Sky client configuration:\n  API URL:    {}\n  Timeout:    {}s\n  User agent: {}\n",
        config.api_url, config.timeout_secs, config.user_agent
    )
}
