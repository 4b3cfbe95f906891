//! The normalized feature record and its baseline status.
//!
//! [`FeatureRecord`] is the one domain entity in Baselyn: an immutable value
//! object the rest of the system filters, sorts, groups, and renders. Records
//! are constructed once (by the client crate or by [`FeatureRecord::fallback`])
//! and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::Error;

/// Sentinel date for records with no baseline availability date.
///
/// Also used by every fallback record, so degraded entries sort as oldest.
pub const EPOCH_DATE: &str = "1970-01-01";

/// Sentinel date for `limited` records with no availability date.
///
/// Far-future so that limited-availability features sort as newest.
pub const FAR_FUTURE_DATE: &str = "9999-12-31";

/// Description text carried by fallback records.
pub const FALLBACK_DESCRIPTION: &str = "Error loading data.";

/// Cross-browser availability maturity of a feature, as published by the
/// Web Platform status service.
///
/// Unrecognized upstream values deserialize to [`BaselineStatus::Unknown`]
/// rather than failing the surrounding payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaselineStatus {
    /// Not yet available across all major browsers.
    Limited,
    /// Newly available across all major browsers.
    Newly,
    /// Widely available; safe to rely on.
    Widely,
    /// Availability could not be determined.
    #[default]
    #[serde(other)]
    Unknown,
}

impl BaselineStatus {
    /// The wire/display token for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            BaselineStatus::Limited => "limited",
            BaselineStatus::Newly => "newly",
            BaselineStatus::Widely => "widely",
            BaselineStatus::Unknown => "unknown",
        }
    }

    /// The date substituted when upstream reports no availability date.
    ///
    /// `limited` features get [`FAR_FUTURE_DATE`] so they sort as newest;
    /// everything else gets [`EPOCH_DATE`].
    pub fn sentinel_date(&self) -> &'static str {
        match self {
            BaselineStatus::Limited => FAR_FUTURE_DATE,
            _ => EPOCH_DATE,
        }
    }
}

impl std::fmt::Display for BaselineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BaselineStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "limited" => Ok(BaselineStatus::Limited),
            "newly" => Ok(BaselineStatus::Newly),
            "widely" => Ok(BaselineStatus::Widely),
            "unknown" => Ok(BaselineStatus::Unknown),
            _ => Err(Error::UnknownStatus(s.to_string())),
        }
    }
}

/// A normalized web platform feature, ready for display.
///
/// Invariant: for every id handed to the client, exactly one `FeatureRecord`
/// comes back; on upstream failure a fallback record is substituted, never
/// an omission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Stable identifier, as used by the upstream catalog.
    pub id: String,

    /// Human-readable display name; equals `id` when upstream has no name.
    pub name: String,

    /// Free-text description; empty when metadata was unavailable.
    pub description: String,

    /// Coarse category derived from the feature's specification links.
    pub category: Category,

    /// Baseline availability status.
    pub status: BaselineStatus,

    /// ISO `YYYY-MM-DD` availability date, or a sentinel value.
    ///
    /// Lexicographic order on this field equals chronological order.
    pub date: String,
}

impl FeatureRecord {
    /// The record substituted when upstream data cannot be obtained for `id`.
    ///
    /// Every failure branch goes through this one constructor so the
    /// degraded shape is uniform: `name = id`, error description, unknown
    /// status, `Web Platform` category, epoch date.
    pub fn fallback(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            description: FALLBACK_DESCRIPTION.to_string(),
            category: Category::WebPlatform,
            status: BaselineStatus::Unknown,
            date: EPOCH_DATE.to_string(),
            id,
        }
    }

    /// Whether this record is a degraded fallback rather than upstream data.
    pub fn is_fallback(&self) -> bool {
        self.status == BaselineStatus::Unknown && self.description == FALLBACK_DESCRIPTION
    }
}

// ============================================================================
// Tests
// ============================================================================
