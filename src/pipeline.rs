//! Barcode Pipeline - Single Entry Point
//!
//! raw code → normalized code → bar pattern → rendered image.
//! Storage of the result is the caller's business; see `asset`.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::encoding::{encode, BarPattern};
use crate::error::CodeError;
use crate::normalize::{normalize, NormalizedCode};
use crate::presets::{PresetRegistry, RenderPreset};
use crate::render::{render, RenderOptions, RenderedImage};
use crate::symbology::Symbology;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Code(#[from] CodeError),

    #[error("Preset not found: {0}")]
    PresetNotFound(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

impl PipelineError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Code(e) => e.kind(),
            Self::PresetNotFound(_) => "preset_not_found",
            Self::InvalidPayload(_) => "invalid_payload",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarcodeRequest {
    pub code: String,
    #[serde(rename = "type")]
    pub symbology: String,
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub options: Option<RenderOverrides>,
}

/// Per-request option overrides, applied on top of a preset or the defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderOverrides {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub margin: Option<f64>,
    #[serde(default, alias = "displayValue")]
    pub display_value: Option<bool>,
    #[serde(default, alias = "fontSize")]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default, alias = "lineColor")]
    pub line_color: Option<String>,
}

impl RenderOverrides {
    pub fn apply(&self, base: RenderOptions) -> RenderOptions {
        RenderOptions {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            margin: self.margin.unwrap_or(base.margin),
            display_value: self.display_value.unwrap_or(base.display_value),
            font_size: self.font_size.unwrap_or(base.font_size),
            background_color: self.background.clone().unwrap_or(base.background_color),
            line_color: self.line_color.clone().unwrap_or(base.line_color),
        }
    }
}

/// Everything the pure core produces for one request
#[derive(Debug, Clone)]
pub struct GeneratedBarcode {
    pub code: NormalizedCode,
    pub pattern: BarPattern,
    pub options: RenderOptions,
    pub image: RenderedImage,
}

impl GeneratedBarcode {
    pub fn symbology(&self) -> Symbology {
        self.code.symbology()
    }
}

/// Wire response; failures are reported in-band with `success: false`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeResponse {
    pub success: bool,
    pub code: String,
    #[serde(rename = "type")]
    pub symbology: String,
    pub svg: String,
    pub svg_base64: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
}

impl BarcodeResponse {
    pub fn from_generated(generated: &GeneratedBarcode) -> Self {
        Self {
            success: true,
            code: generated.code.as_str().to_string(),
            symbology: generated.symbology().to_string(),
            svg: generated.image.svg.clone(),
            svg_base64: generated.image.base64(),
            error: None,
            error_kind: None,
        }
    }

    pub fn from_error(symbology: &str, error: &PipelineError) -> Self {
        Self {
            success: false,
            code: String::new(),
            symbology: symbology.to_string(),
            svg: String::new(),
            svg_base64: String::new(),
            error: Some(error.to_string()),
            error_kind: Some(error.kind().to_string()),
        }
    }
}

/// The pure core: no state, no I/O
pub fn generate(
    code: &str,
    symbology: Symbology,
    options: &RenderOptions,
) -> Result<GeneratedBarcode, CodeError> {
    let code = normalize(code, symbology)?;
    let pattern = encode(&code);
    let image = render(&pattern, code.as_str(), options)?;

    Ok(GeneratedBarcode {
        code,
        pattern,
        options: options.clone(),
        image,
    })
}

/// Request-level service: resolves presets and overrides, then runs the core
#[derive(Debug, Clone)]
pub struct BarcodeService {
    presets: PresetRegistry,
}

impl BarcodeService {
    pub fn new(presets: PresetRegistry) -> Self {
        Self { presets }
    }

    pub fn list_presets(&self) -> Vec<&RenderPreset> {
        self.presets.list()
    }

    pub fn get_preset(&self, id: &str) -> Option<&RenderPreset> {
        self.presets.get(id)
    }

    /// Preset (or defaults) with the request's overrides applied
    pub fn resolve_options(&self, request: &BarcodeRequest) -> Result<RenderOptions, PipelineError> {
        let base = match &request.preset {
            Some(id) => self
                .presets
                .get(id)
                .map(|p| p.options.clone())
                .ok_or_else(|| PipelineError::PresetNotFound(id.clone()))?,
            None => RenderOptions::default(),
        };

        Ok(match &request.options {
            Some(overrides) => overrides.apply(base),
            None => base,
        })
    }

    pub fn generate(&self, request: &BarcodeRequest) -> Result<GeneratedBarcode, PipelineError> {
        let result = request
            .symbology
            .parse::<Symbology>()
            .map_err(PipelineError::from)
            .and_then(|symbology| {
                let options = self.resolve_options(request)?;
                Ok(generate(&request.code, symbology, &options)?)
            });

        match &result {
            Ok(generated) => debug!(
                symbology = %generated.symbology(),
                code = generated.code.as_str(),
                modules = generated.pattern.len(),
                "barcode generated"
            ),
            Err(e) => debug!(
                symbology = request.symbology.as_str(),
                kind = e.kind(),
                error = %e,
                "barcode rejected"
            ),
        }

        result
    }

    pub fn respond(&self, request: &BarcodeRequest) -> BarcodeResponse {
        match self.generate(request) {
            Ok(generated) => BarcodeResponse::from_generated(&generated),
            Err(e) => BarcodeResponse::from_error(&request.symbology, &e),
        }
    }

    /// Parse a JSON request and respond; a malformed payload is an in-band failure too
    pub fn respond_json(&self, payload: &str) -> BarcodeResponse {
        match serde_json::from_str::<BarcodeRequest>(payload) {
            Ok(request) => self.respond(&request),
            Err(e) => {
                let error = PipelineError::from(e);
                debug!(error = %error, "payload rejected");
                BarcodeResponse::from_error("", &error)
            }
        }
    }
}

impl Default for BarcodeService {
    fn default() -> Self {
        Self::new(PresetRegistry::default())
    }
}
