//! Health-check command.

use anyhow::Result;
use pocketsomm_client::Client;
use tracing::info;

pub async fn run(client: &Client) -> Result<()> {
    info!(base_url = client.base_url(), "checking backend health");
    let status = client.health().await?;
    println!("Backend at {} is {status}.", client.base_url());
    Ok(())
}
