//! Menu-recommendation command.

use anyhow::{Context, Result};
use pocketsomm_client::Client;
use std::path::Path;
use tracing::info;

pub async fn recommend(client: &Client, user: &str, pdf: &Path) -> Result<()> {
    let bytes = std::fs::read(pdf)
        .with_context(|| format!("failed to read menu {}", pdf.display()))?;
    info!(user, menu = %pdf.display(), bytes = bytes.len(), "requesting menu recommendations");

    let wines = client.recommend_from_menu_pdf(user, &bytes).await?;
    if wines.is_empty() {
        println!("Nothing on this menu matched your taste.");
        return Ok(());
    }
    println!("Recommended from the menu:");
    for wine in &wines {
        println!("  {}  ({})", wine.label, wine.wine_id);
    }
    Ok(())
}
