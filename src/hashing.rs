//! Hashing - SHA-256 Content and Request Digests
//!
//! Deterministic hashes let callers de-duplicate stored barcodes.

use serde::Serialize;
use serde_json::{to_string, Value};
use sha2::{Digest, Sha256};

use crate::render::RenderOptions;
use crate::symbology::Symbology;
use crate::ENGINE_VERSION;

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Convert to canonical JSON (sorted keys, no whitespace)
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let v: Value = serde_json::to_value(value)?;
    to_string(&sort_value(&v))
}

fn sort_value(v: &Value) -> Value {
    match v {
        Value::Object(map) => {
            let mut sorted: Vec<_> = map.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                sorted
                    .into_iter()
                    .map(|(k, v)| (k.clone(), sort_value(v)))
                    .collect(),
            )
        }
        Value::Array(arr) => Value::Array(arr.iter().map(sort_value).collect()),
        _ => v.clone(),
    }
}

#[derive(Serialize)]
struct RequestKey<'a> {
    symbology: Symbology,
    code: &'a str,
    options: &'a RenderOptions,
    engine_version: &'a str,
}

/// request_hash = sha256(canonical {symbology, normalized code, resolved options, engine version})
pub fn compute_request_hash(
    symbology: Symbology,
    code: &str,
    options: &RenderOptions,
) -> Result<String, serde_json::Error> {
    let canonical = canonical_json(&RequestKey {
        symbology,
        code,
        options,
        engine_version: ENGINE_VERSION,
    })?;
    Ok(sha256_hex(canonical.as_bytes()))
}
