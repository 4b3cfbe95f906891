//! `baselyn fetch`: snapshot the normalized dataset to JSON files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::Utc;

use baselyn_client::WebStatusClient;
use baselyn_core::{merge_id_sets, normalize_id};
use baselyn_store::{CustomIds, KeyValueStore};

use crate::snapshot::{FeatureSnapshot, IdSnapshot, FEATURES_FILE, FEATURE_IDS_FILE};

pub async fn run(
    ids: Vec<String>,
    ids_file: Option<PathBuf>,
    out: PathBuf,
    store: Arc<dyn KeyValueStore>,
) -> Result<()> {
    let mut requested: Vec<String> = ids
        .iter()
        .map(|id| normalize_id(id))
        .filter(|id| !id.is_empty())
        .collect();

    if let Some(path) = &ids_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading id file {}", path.display()))?;
        requested.extend(parse_id_lines(&text));
    }

    let custom = CustomIds::new(store);
    let all_ids = merge_id_sets(&requested, &custom.ids());
    if all_ids.is_empty() {
        bail!("no feature ids given (pass ids, --ids-file, or `baselyn add` some first)");
    }

    tracing::info!(count = all_ids.len(), "fetching feature dataset");
    let client = WebStatusClient::new();
    let features = client.fetch_features(&all_ids).await;
    tracing::info!(count = features.len(), "normalized features");

    let build_timestamp = Utc::now().to_rfc3339();
    std::fs::create_dir_all(&out)
        .with_context(|| format!("creating output directory {}", out.display()))?;

    write_json(
        &out.join(FEATURE_IDS_FILE),
        &IdSnapshot {
            ids: all_ids,
            build_timestamp: build_timestamp.clone(),
        },
    )?;
    write_json(
        &out.join(FEATURES_FILE),
        &FeatureSnapshot {
            features,
            build_timestamp,
        },
    )?;

    tracing::info!(out = %out.display(), "wrote {FEATURES_FILE} and {FEATURE_IDS_FILE}");
    Ok(())
}

/// Parse an ids file: one id per line, `#` starts a comment.
fn parse_id_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .map(normalize_id)
        .filter(|id| !id.is_empty())
        .collect()
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}
