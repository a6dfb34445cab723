//! Tasting-log commands.

use anyhow::Result;
use pocketsomm_client::Client;
use tracing::info;

pub async fn add(
    client: &Client,
    user: &str,
    wine_id: &str,
    rating: f64,
    context: Option<&str>,
    notes: Option<&str>,
) -> Result<()> {
    info!(user, wine_id, rating, "recording tasting");
    let profile = client
        .add_tasting(user, wine_id, rating, context, notes)
        .await?;
    let count = profile.tastings.map(|t| t.len()).unwrap_or(0);
    println!("Recorded {wine_id} at {rating:.1}. You have {count} tasting(s).");
    Ok(())
}
