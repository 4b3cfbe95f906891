//! Snapshot file formats written by `fetch` and read by `list`.

use serde::{Deserialize, Serialize};

use baselyn_core::FeatureRecord;

/// File name of the normalized feature snapshot.
pub const FEATURES_FILE: &str = "features.json";

/// File name of the id-list snapshot.
pub const FEATURE_IDS_FILE: &str = "feature-ids.json";

/// The normalized dataset with its build time.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSnapshot {
    pub features: Vec<FeatureRecord>,
    pub build_timestamp: String,
}

/// The fetched id universe with its build time.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdSnapshot {
    pub ids: Vec<String>,
    pub build_timestamp: String,
}
