//! Barcode Core - Symbology Encoder
//!
//! # The Rules (Non-Negotiable)
//! 1. Normalize Before Encoding
//! 2. Check Digits Are Recomputed, Never Trusted
//! 3. Tables Are Constants
//! 4. Deterministic Output
//! 5. Errors Are Terminal
//! 6. The Core Never Stores, the Caller Persists

pub mod asset;
pub mod checksum;
pub mod encoding;
pub mod error;
pub mod hashing;
pub mod normalize;
pub mod pipeline;
pub mod presets;
pub mod render;
pub mod symbology;
pub mod validation;

pub use asset::MediaAsset;
pub use checksum::{check_digit, has_valid_check_digit, weighted_sum, Digit};
pub use encoding::{encode, BarPattern};
pub use error::CodeError;
pub use normalize::{normalize, NormalizedCode};
pub use pipeline::{
    generate, BarcodeRequest, BarcodeResponse, BarcodeService, GeneratedBarcode, PipelineError,
    RenderOverrides,
};
pub use presets::{PresetRegistry, RenderPreset};
pub use render::{render, RenderOptions, RenderedImage};
pub use symbology::{ChecksummedSymbology, Symbology};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
