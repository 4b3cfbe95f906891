//! `baselyn list`: render a filtered, grouped snapshot listing.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use baselyn_query::{apply, group_by_category, FeatureFilters};
use baselyn_store::{KeyValueStore, StarredIds};

use crate::snapshot::FeatureSnapshot;

pub fn run(data: &Path, filters: &FeatureFilters, store: Arc<dyn KeyValueStore>) -> Result<()> {
    let text = std::fs::read_to_string(data)
        .with_context(|| format!("reading snapshot {} (run `baselyn fetch` first)", data.display()))?;
    let snapshot: FeatureSnapshot = serde_json::from_str(&text)
        .with_context(|| format!("parsing snapshot {}", data.display()))?;

    let starred = StarredIds::new(store).starred_set();
    let selected = apply(&snapshot.features, filters, &starred);

    if selected.is_empty() {
        println!("No features match the current filters.");
        return Ok(());
    }

    for (category, group) in group_by_category(&selected) {
        println!("{category} ({})", group.len());
        for record in &group {
            let marker = if starred.contains(&record.id) { "*" } else { " " };
            println!(
                "  {marker} {name} [{id}] {status} {date}",
                name = record.name,
                id = record.id,
                status = record.status,
                date = record.date,
            );
        }
        println!();
    }
    Ok(())
}
