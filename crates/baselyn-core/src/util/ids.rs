//! Feature-id utilities.
//!
//! Upstream feature identifiers are lowercase kebab-case strings. These
//! helpers normalize user-entered ids to that shape and build the merged id
//! universe the dashboard fetches (base catalog ids plus user-added ones).

/// Normalize a user-entered feature id.
///
/// Trims surrounding whitespace and lowercases, matching the upstream
/// catalog's id convention. Does not validate existence; an id that names
/// nothing upstream simply resolves to a fallback record.
///
/// # Examples
///
/// ```
/// use baselyn_core::util::ids::normalize_id;
///
/// assert_eq!(normalize_id("  CSS-Subgrid "), "css-subgrid");
/// assert_eq!(normalize_id("view-transitions"), "view-transitions");
/// ```
pub fn normalize_id(id: &str) -> String {
    id.trim().to_lowercase()
}

/// Deduplicate and sort a collection of ids.
///
/// The client does not deduplicate its input, so callers use this before
/// handing an id list to `fetch_features`.
pub fn unique_sorted<I, S>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = ids.into_iter().map(Into::into).collect();
    out.sort();
    out.dedup();
    out
}

/// The merged id universe: unique sorted union of base and extra ids.
///
/// # Examples
///
/// ```
/// use baselyn_core::util::ids::merge_id_sets;
///
/// let base = vec!["grid".to_string(), "anchor-positioning".to_string()];
/// let extra = vec!["grid".to_string(), "subgrid".to_string()];
/// assert_eq!(
///     merge_id_sets(&base, &extra),
///     vec!["anchor-positioning", "grid", "subgrid"],
/// );
/// ```
pub fn merge_id_sets(base: &[String], extra: &[String]) -> Vec<String> {
    unique_sorted(base.iter().chain(extra).cloned())
}
