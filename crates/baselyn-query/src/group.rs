//! Category grouping for the dashboard's sectioned layout.

use std::collections::BTreeMap;

use baselyn_core::{Category, FeatureRecord};

/// Group records by category, preserving record order within each group.
///
/// The returned map iterates in alphabetical display order (CSS, HTML,
/// JavaScript, Web Platform); categories with no records are absent.
pub fn group_by_category(features: &[FeatureRecord]) -> BTreeMap<Category, Vec<FeatureRecord>> {
    let mut groups: BTreeMap<Category, Vec<FeatureRecord>> = BTreeMap::new();
    for feature in features {
        groups.entry(feature.category).or_default().push(feature.clone());
    }
    groups
}

// ============================================================================
// Tests
// ============================================================================
