//! Wine catalogue commands.

use anyhow::Result;
use pocketsomm_client::{Client, WineProfile};
use tracing::{info, warn};

pub async fn show(client: &Client, wine_id: &str) -> Result<()> {
    info!(wine_id, "fetching wine detail");
    let wine = client.fetch_wine_detail(wine_id).await?;

    println!("{}", wine.display_name());
    let region_line = wine.region_line();
    if !region_line.is_empty() {
        println!("{region_line}");
    }
    if let Some(producer) = &wine.producer {
        println!("Producer: {producer}");
    }
    if let Some(color) = &wine.color {
        println!("Color: {color}");
    }
    if let Some(grapes) = &wine.grapes_line {
        println!("Grapes: {grapes}");
    }

    // Similar wines are enrichment; a failure is logged, never fatal.
    match client.fetch_similar_wines(wine_id).await {
        Ok(similar) if !similar.is_empty() => {
            println!();
            println!("Similar wines:");
            for similar_wine in similar {
                println!(
                    "  {:.2}  {}  ({})",
                    similar_wine.score, similar_wine.name, similar_wine.wine_id
                );
            }
        }
        Ok(_) => {}
        Err(e) => warn!(wine_id, error = %e, "could not load similar wines"),
    }

    Ok(())
}

pub async fn search(client: &Client, query: &str) -> Result<()> {
    let hits = client.search_wines(query).await?;
    if hits.is_empty() {
        println!("No wines matched '{query}'.");
        return Ok(());
    }
    for hit in &hits {
        match &hit.producer {
            Some(producer) => println!("{}  {} ({producer})", hit.wine_id, hit.name),
            None => println!("{}  {}", hit.wine_id, hit.name),
        }
    }
    Ok(())
}

pub async fn resolve(client: &Client, name: &str) -> Result<()> {
    info!(name, "resolving wine");
    let profile = client.resolve_wine_by_name(name).await?;
    if profile.is_not_found() {
        println!("No wine matched '{name}'.");
        return Ok(());
    }
    print_wine_profile(&profile);
    Ok(())
}

pub(crate) fn print_wine_profile(profile: &WineProfile) {
    if let Some(name) = profile.display_name() {
        println!("{name}");
    }
    if let Some(producer) = &profile.producer {
        println!("Producer: {producer}");
    }
    let origin: Vec<&str> = [&profile.appellation, &profile.region, &profile.country]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect();
    if !origin.is_empty() {
        println!("Origin: {}", origin.join(", "));
    }
    if let Some(grapes) = &profile.grapes {
        println!("Grapes: {}", grapes.join(", "));
    }
    if let Some(description) = &profile.style_description {
        println!("{description}");
    }
    if let Some(confidence) = &profile.confidence {
        println!("Confidence: {confidence}");
    }
}
