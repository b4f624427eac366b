//! GeoJSON dataset augmentation.
//!
//! Walks a FeatureCollection, runs the age normalizer over a free-text
//! property of every feature, and writes the result (or `null`) into a new
//! property. All other properties, their order, and the feature order are
//! preserved; the normalizer itself never fails, so the only error sources
//! here are I/O and malformed JSON.

use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path}: expected a FeatureCollection with a \"features\" array")]
    NotFeatureCollection { path: String },
}

/// Counts from one augmentation run.
///
/// `parsed + missing` can be less than `features` when a feature carries no
/// `properties` object at all; such features are counted but left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AugmentStats {
    /// Features visited.
    pub features: usize,
    /// Features whose age text produced a value.
    pub parsed: usize,
    /// Features written with an explicit `null`.
    pub missing: usize,
}

/// Augment an in-memory FeatureCollection: for every feature, read
/// `properties[source]` and set `properties[target]` to the normalized year
/// value or JSON `null`. A document without a `features` array is a no-op.
pub fn augment_value(doc: &mut Value, source: &str, target: &str) -> AugmentStats {
    let mut stats = AugmentStats::default();

    let Some(features) = doc.get_mut("features").and_then(Value::as_array_mut) else {
        return stats;
    };

    for feature in features {
        stats.features += 1;

        let Some(props) = feature.get_mut("properties").and_then(Value::as_object_mut) else {
            continue;
        };

        let age_text = props.get(source).and_then(Value::as_str).map(str::to_owned);
        match crate::normalize_opt(age_text.as_deref()) {
            Some(year) => {
                props.insert(target.to_string(), Value::from(year));
                stats.parsed += 1;
            }
            None => {
                props.insert(target.to_string(), Value::Null);
                stats.missing += 1;
            }
        }
    }

    stats
}

/// Read a FeatureCollection from `input`, augment it, and write it
/// pretty-printed to `output`.
pub fn augment_file(input: &Path, output: &Path, source: &str, target: &str) -> Result<AugmentStats, DatasetError> {
    let in_path = input.display().to_string();
    let out_path = output.display().to_string();

    let raw = fs::read_to_string(input).map_err(|e| DatasetError::Read { path: in_path.clone(), source: e })?;
    let mut doc: Value =
        serde_json::from_str(&raw).map_err(|e| DatasetError::Json { path: in_path.clone(), source: e })?;

    if !doc.get("features").is_some_and(Value::is_array) {
        return Err(DatasetError::NotFeatureCollection { path: in_path });
    }

    let stats = augment_value(&mut doc, source, target);

    let pretty =
        serde_json::to_string_pretty(&doc).map_err(|e| DatasetError::Json { path: out_path.clone(), source: e })?;
    fs::write(output, pretty).map_err(|e| DatasetError::Write { path: out_path, source: e })?;

    Ok(stats)
}
