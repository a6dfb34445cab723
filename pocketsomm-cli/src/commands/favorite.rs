//! Favorite-management commands.

use anyhow::{Context, Result, bail};
use pocketsomm_client::Client;
use std::path::Path;
use tracing::info;

pub async fn by_name(client: &Client, user: &str, name: &str) -> Result<()> {
    info!(user, name, "adding favorite by name");
    let profile = client.add_favorite_by_name(user, name).await?;
    let count = profile.favorite_wines.map(|f| f.len()).unwrap_or(0);
    println!("Added '{name}'. You now have {count} favorite(s).");
    Ok(())
}

pub async fn from_photo(
    client: &Client,
    user: &str,
    photo: &Path,
    content_type: Option<&str>,
) -> Result<()> {
    let image = std::fs::read(photo)
        .with_context(|| format!("failed to read photo {}", photo.display()))?;
    info!(user, photo = %photo.display(), bytes = image.len(), "adding favorite from photo");

    let added = client
        .add_favorite_from_photo(user, &image, content_type)
        .await?;
    println!("Recognized:");
    super::wine::print_wine_profile(&added.wine_profile);
    if let Some(updated) = added.user {
        let count = updated.favorite_wines.map(|f| f.len()).unwrap_or(0);
        println!("You now have {count} favorite(s).");
    }
    Ok(())
}

/// Resolve the name, show what matched, then save the resolved profile.
/// The save endpoint returns nothing useful, so the profile is re-fetched
/// for the closing summary.
pub async fn from_profile(client: &Client, user: &str, name: &str) -> Result<()> {
    info!(user, name, "resolving wine before saving");
    let profile = client.resolve_wine_by_name(name).await?;
    if profile.is_not_found() {
        bail!("no wine matched '{name}'");
    }

    super::wine::print_wine_profile(&profile);
    client.add_favorite_from_profile(user, &profile).await?;

    let updated = client.fetch_user_profile(user).await?;
    let count = updated.favorite_wines.map(|f| f.len()).unwrap_or(0);
    println!("Saved. You now have {count} favorite(s).");
    Ok(())
}
