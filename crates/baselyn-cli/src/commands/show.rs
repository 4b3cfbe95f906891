//! `baselyn show`: fetch and print one feature.

use anyhow::Result;

use baselyn_client::WebStatusClient;
use baselyn_core::normalize_id;

pub async fn run(id: &str) -> Result<()> {
    let client = WebStatusClient::new();
    let record = client.fetch_feature(&normalize_id(id)).await;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
