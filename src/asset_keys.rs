//! Asset key loading and filtering
//!
//! Keys come from a JSON array whose elements are either `"a/b/c"` strings or
//! `["a", "b", "c"]` segment arrays.

use crate::error::{AppError, Result};
use crate::types::AssetKey;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAssetKey {
    Path(String),
    Segments(Vec<String>),
}

impl RawAssetKey {
    fn into_key(self) -> Result<AssetKey> {
        let segments: Vec<String> = match self {
            RawAssetKey::Path(path) => path.split('/').map(str::to_string).collect(),
            RawAssetKey::Segments(segments) => segments,
        };

        if segments.is_empty() || segments.iter().any(|s| s.is_empty()) {
            return Err(AppError::InvalidAssetKeys(format!(
                "empty path segment in {:?}",
                segments.join("/")
            )));
        }

        Ok(AssetKey::new(segments))
    }
}

/// Parse asset keys from JSON text, returned sorted and de-duplicated
pub fn parse_asset_keys(content: &str) -> Result<Vec<AssetKey>> {
    let raw: Vec<RawAssetKey> =
        serde_json::from_str(content).map_err(|e| AppError::InvalidAssetKeys(e.to_string()))?;

    let mut keys = raw
        .into_iter()
        .map(RawAssetKey::into_key)
        .collect::<Result<Vec<_>>>()?;

    keys.sort();
    keys.dedup();
    Ok(keys)
}

/// Read and parse an asset key file
pub fn load_asset_keys(path: &Path) -> Result<Vec<AssetKey>> {
    if !path.exists() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let keys = parse_asset_keys(&content)?;
    tracing::debug!("Parsed {} asset keys from {}", keys.len(), path.display());
    Ok(keys)
}

/// Keys whose display form contains `query`, ignoring case
///
/// Surrounding whitespace in the query is ignored for matching only.
pub fn filter_keys<'a>(keys: &'a [AssetKey], query: &str) -> Vec<&'a AssetKey> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return keys.iter().collect();
    }

    keys.iter()
        .filter(|key| key.to_string().to_lowercase().contains(&needle))
        .collect()
}
