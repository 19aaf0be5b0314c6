//! Media Asset Handoff
//!
//! The record a caller stores in its media library. Building it is the only
//! place ids and timestamps appear; the core itself stays pure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::hashing::{compute_request_hash, sha256_hex};
use crate::pipeline::GeneratedBarcode;

pub const SVG_MIME_TYPE: &str = "image/svg+xml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAsset {
    pub id: String,
    pub filename: String,
    pub mime_type: String,
    pub symbology: String,
    pub code: String,
    pub width: f64,
    pub height: f64,
    pub size_bytes: usize,
    pub sha256: String,
    pub request_hash: String,
    pub created_at: DateTime<Utc>,
    pub data_base64: String,
}

impl MediaAsset {
    pub fn from_barcode(generated: &GeneratedBarcode) -> Result<Self, serde_json::Error> {
        let symbology = generated.symbology();
        let code = generated.code.as_str();
        let svg = generated.image.svg.as_bytes();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            filename: format!("barcode-{}-{}.svg", symbology, sanitize(code)),
            mime_type: SVG_MIME_TYPE.to_string(),
            symbology: symbology.to_string(),
            code: code.to_string(),
            width: generated.image.width,
            height: generated.image.height,
            size_bytes: svg.len(),
            sha256: sha256_hex(svg),
            request_hash: compute_request_hash(symbology, code, &generated.options)?,
            created_at: Utc::now(),
            data_base64: generated.image.base64(),
        })
    }
}

/// Keep `[A-Za-z0-9_-]`, replace anything else with `_`
fn sanitize(code: &str) -> String {
    code.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
