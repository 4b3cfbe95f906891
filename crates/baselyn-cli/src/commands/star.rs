//! `baselyn star` / `unstar` / `starred`: manage the starred id list.

use std::sync::Arc;

use anyhow::{bail, Result};

use baselyn_core::normalize_id;
use baselyn_store::{KeyValueStore, StarredIds};

pub fn star(id: &str, store: Arc<dyn KeyValueStore>) -> Result<()> {
    let id = normalize_id(id);
    if id.is_empty() {
        bail!("empty feature id");
    }
    if StarredIds::new(store).star(&id) {
        println!("Starred {id}.");
    } else {
        println!("{id} is already starred.");
    }
    Ok(())
}

pub fn unstar(id: &str, store: Arc<dyn KeyValueStore>) -> Result<()> {
    let id = normalize_id(id);
    if StarredIds::new(store).unstar(&id) {
        println!("Unstarred {id}.");
    } else {
        println!("{id} was not starred.");
    }
    Ok(())
}

pub fn starred(store: Arc<dyn KeyValueStore>) -> Result<()> {
    let ids = StarredIds::new(store).ids();
    if ids.is_empty() {
        println!("No starred features.");
    } else {
        for id in ids {
            println!("{id}");
        }
    }
    Ok(())
}
