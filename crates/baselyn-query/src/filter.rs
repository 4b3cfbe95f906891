//! The filter model and its application.
//!
//! [`FeatureFilters`] is the value the dashboard's controls edit: a search
//! string, optional category/status constraints, the favorites toggle, and
//! a sort order. [`apply`] evaluates it over a record slice.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use baselyn_core::{BaselineStatus, Category, FeatureRecord};

use crate::error::Error;

/// Presentation order of filtered records.
///
/// Serde/`FromStr` tokens are the historical control values: `newest`,
/// `oldest`, `az`, `za`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Availability date, newest first. The dashboard default.
    #[default]
    Newest,
    /// Availability date, oldest first.
    Oldest,
    /// Display name, A to Z.
    #[serde(rename = "az")]
    NameAsc,
    /// Display name, Z to A.
    #[serde(rename = "za")]
    NameDesc,
}

impl SortOrder {
    /// The control token for this order.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::NameAsc => "az",
            SortOrder::NameDesc => "za",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "az" => Ok(SortOrder::NameAsc),
            "za" => Ok(SortOrder::NameDesc),
            _ => Err(Error::UnknownSortOrder(s.to_string())),
        }
    }
}

/// Whether to show everything or only starred records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoritesFilter {
    /// No favorites constraint.
    #[default]
    All,
    /// Only records whose id is in the starred set.
    Starred,
}

impl std::str::FromStr for FavoritesFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(FavoritesFilter::All),
            "starred" => Ok(FavoritesFilter::Starred),
            _ => Err(Error::UnknownFavoritesFilter(s.to_string())),
        }
    }
}

/// The complete filter state of the dashboard controls.
///
/// `Default` passes every record, sorted newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureFilters {
    /// Case-insensitive substring match on the display name; empty matches
    /// everything.
    #[serde(default)]
    pub search: String,

    /// Exact category constraint; `None` matches everything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Exact status constraint; `None` matches everything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BaselineStatus>,

    /// Favorites constraint.
    #[serde(default)]
    pub favorites: FavoritesFilter,

    /// Presentation order.
    #[serde(default)]
    pub sort: SortOrder,
}

impl FeatureFilters {
    /// Whether `record` passes every active constraint.
    pub fn matches(&self, record: &FeatureRecord, starred: &HashSet<String>) -> bool {
        if !self.search.is_empty()
            && !record
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase())
        {
            return false;
        }
        if let Some(category) = self.category {
            if record.category != category {
                return false;
            }
        }
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        if self.favorites == FavoritesFilter::Starred && !starred.contains(&record.id) {
            return false;
        }
        true
    }
}

/// Filter and sort `features` per `filters`.
///
/// The sort is stable, so records that compare equal keep their input
/// order. Date and name comparisons are plain string comparisons; ISO
/// dates order chronologically under them, including the sentinel values.
pub fn apply(
    features: &[FeatureRecord],
    filters: &FeatureFilters,
    starred: &HashSet<String>,
) -> Vec<FeatureRecord> {
    let mut out: Vec<FeatureRecord> = features
        .iter()
        .filter(|record| filters.matches(record, starred))
        .cloned()
        .collect();

    out.sort_by(|a, b| match filters.sort {
        SortOrder::Newest => b.date.cmp(&a.date),
        SortOrder::Oldest => a.date.cmp(&b.date),
        SortOrder::NameAsc => a.name.cmp(&b.name),
        SortOrder::NameDesc => b.name.cmp(&a.name),
    });
    out
}

// ============================================================================
// Tests
// ============================================================================
