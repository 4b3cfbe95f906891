//! `baselyn add`: record a custom feature id.

use std::sync::Arc;

use anyhow::{bail, Result};

use baselyn_core::normalize_id;
use baselyn_store::{CustomIds, KeyValueStore};

pub fn run(id: &str, store: Arc<dyn KeyValueStore>) -> Result<()> {
    let id = normalize_id(id);
    if id.is_empty() {
        bail!("empty feature id");
    }
    if CustomIds::new(store).add(&id) {
        println!("Added {id}.");
    } else {
        println!("{id} is already present.");
    }
    Ok(())
}
