//! Profile inspection commands.

use anyhow::Result;
use pocketsomm_client::{Client, UserProfile};
use tracing::info;

pub async fn show(client: &Client, user: &str) -> Result<()> {
    info!(user, "fetching profile");
    let profile = client.fetch_user_profile(user).await?;
    print_profile(&profile);
    Ok(())
}

pub async fn insights(client: &Client, user: &str) -> Result<()> {
    info!(user, "fetching insights");
    let insights = client.fetch_user_insights(user).await?;

    println!("{}", insights.summary);
    print_top("Top grapes", &insights.top_grapes);
    print_top("Top countries", &insights.top_countries);
    print_top("Top regions", &insights.top_regions);
    if !insights.top_vintages.is_empty() {
        let vintages: Vec<String> = insights.top_vintages.iter().map(|v| v.to_string()).collect();
        println!("Top vintages: {}", vintages.join(", "));
    }
    Ok(())
}

fn print_top(label: &str, values: &[String]) {
    if !values.is_empty() {
        println!("{label}: {}", values.join(", "));
    }
}

pub(crate) fn print_profile(profile: &UserProfile) {
    println!("User: {}", profile.user_id);

    match &profile.survey_answers {
        Some(answers) => {
            let styles = if answers.favorite_styles.is_empty() {
                "none".to_string()
            } else {
                answers.favorite_styles.join(", ")
            };
            println!("Survey: styles {styles}");
            println!(
                "        tannin {} / acidity {} / oak {} / adventure {}",
                answers.tannin_pref, answers.acidity_pref, answers.oak_pref, answers.adventure_pref
            );
        }
        None => println!("Survey: not taken yet"),
    }

    match &profile.favorite_wines {
        Some(favorites) if !favorites.is_empty() => {
            println!("Favorites ({}):", favorites.len());
            for favorite in favorites {
                let source = favorite.source.as_deref().unwrap_or("unknown");
                println!(
                    "  {}  ({}, via {source})",
                    favorite.display_name(),
                    favorite.wine_id
                );
            }
        }
        _ => println!("Favorites: none"),
    }

    match &profile.tastings {
        Some(tastings) if !tastings.is_empty() => {
            println!("Tastings ({}):", tastings.len());
            for tasting in tastings {
                let notes = tasting.notes.as_deref().unwrap_or("-");
                println!("  {}  rated {:.1}  {notes}", tasting.wine_id, tasting.rating);
            }
        }
        _ => println!("Tastings: none"),
    }
}
