//! Taste-survey submission.

use anyhow::Result;
use pocketsomm_client::{Client, PrefLevel, SurveyAnswers};
use tracing::info;

/// Parse a preference level from its lowercase wire name.
pub fn parse_level(value: &str) -> Result<PrefLevel, String> {
    match value.to_ascii_lowercase().as_str() {
        "low" => Ok(PrefLevel::Low),
        "medium" => Ok(PrefLevel::Medium),
        "high" => Ok(PrefLevel::High),
        other => Err(format!("expected low, medium or high, got '{other}'")),
    }
}

pub async fn submit(
    client: &Client,
    user: &str,
    styles: Vec<String>,
    tannin: PrefLevel,
    acidity: PrefLevel,
    oak: PrefLevel,
    adventure: PrefLevel,
) -> Result<()> {
    let answers = SurveyAnswers {
        favorite_styles: styles,
        tannin_pref: tannin,
        acidity_pref: acidity,
        oak_pref: oak,
        adventure_pref: adventure,
    };
    info!(user, "submitting survey");

    let profile = client.submit_survey(user, &answers).await?;
    println!("Survey saved.");
    super::profile::print_profile(&profile);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_accepts_any_case() {
        assert_eq!(parse_level("low").unwrap(), PrefLevel::Low);
        assert_eq!(parse_level("Medium").unwrap(), PrefLevel::Medium);
        assert_eq!(parse_level("HIGH").unwrap(), PrefLevel::High);
        assert!(parse_level("extreme").is_err());
    }
}
