//! Data types for the PocketSomm API.
//!
//! Field names match the backend's snake_case JSON keys directly, so no
//! rename attributes are needed. Optional response fields carry
//! `#[serde(default)]` because the backend omits keys it has no value for
//! rather than sending `null`.

use serde::{Deserialize, Serialize};

/// One of the backend's three-step preference scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefLevel {
    /// Low preference.
    Low,
    /// Medium preference.
    #[default]
    Medium,
    /// High preference.
    High,
}

impl PrefLevel {
    /// The lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            PrefLevel::Low => "low",
            PrefLevel::Medium => "medium",
            PrefLevel::High => "high",
        }
    }
}

impl std::fmt::Display for PrefLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Taste-survey answers, submitted verbatim and echoed back inside the
/// user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyAnswers {
    /// Preferred wine styles, e.g. `"bold_red"`, `"crisp_white"`.
    pub favorite_styles: Vec<String>,
    /// Tannin preference.
    pub tannin_pref: PrefLevel,
    /// Acidity preference.
    pub acidity_pref: PrefLevel,
    /// Oak preference.
    pub oak_pref: PrefLevel,
    /// Willingness to try unfamiliar wines.
    pub adventure_pref: PrefLevel,
}

impl Default for SurveyAnswers {
    /// No styles selected, every preference medium except oak, which
    /// starts low.
    fn default() -> Self {
        Self {
            favorite_styles: Vec::new(),
            tannin_pref: PrefLevel::Medium,
            acidity_pref: PrefLevel::Medium,
            oak_pref: PrefLevel::Low,
            adventure_pref: PrefLevel::Medium,
        }
    }
}

/// A user's stored taste profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier.
    pub user_id: String,
    /// The user's survey answers, once submitted.
    #[serde(default)]
    pub survey_answers: Option<SurveyAnswers>,
    /// Latent style embedding maintained by the backend.
    #[serde(default)]
    pub style_vec: Option<Vec<f64>>,
    /// Saved favorite wines.
    #[serde(default)]
    pub favorite_wines: Option<Vec<FavoriteEntry>>,
    /// Recorded tastings.
    #[serde(default)]
    pub tastings: Option<Vec<Tasting>>,
}

/// A wine saved to the user's favorites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    /// Identifier of the favorited wine.
    pub wine_id: String,
    /// How the favorite was added, e.g. `"photo"` or `"by-name"`.
    #[serde(default)]
    pub source: Option<String>,
    /// When the favorite was added, as reported by the backend.
    #[serde(default)]
    pub added_at: Option<String>,
}

impl FavoriteEntry {
    /// Human-readable name derived from the identifier.
    pub fn display_name(&self) -> String {
        prettify_wine_id(&self.wine_id)
    }
}

/// A recorded tasting of one wine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tasting {
    /// Identifier of the tasted wine.
    pub wine_id: String,
    /// Rating on the backend's scale, typically 0 to 5.
    pub rating: f64,
    /// Where or with what the wine was tasted.
    #[serde(default)]
    pub context: Option<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// When the tasting was recorded, as reported by the backend.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Full catalogue entry for a wine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WineDetail {
    /// Unique wine identifier.
    pub wine_id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Producer name.
    #[serde(default)]
    pub producer: Option<String>,
    /// Country of origin.
    #[serde(default)]
    pub country: Option<String>,
    /// Growing region.
    #[serde(default)]
    pub region: Option<String>,
    /// Appellation within the region.
    #[serde(default)]
    pub appellation: Option<String>,
    /// Wine color, e.g. `"red"`.
    #[serde(default)]
    pub color: Option<String>,
    /// Pre-joined grape varieties, e.g. `"Cabernet Sauvignon, Merlot"`.
    #[serde(default)]
    pub grapes_line: Option<String>,
    /// Text the backend embeds for similarity search.
    #[serde(default)]
    pub embedding_text: Option<String>,
    /// Inline label image, base64-encoded.
    #[serde(default)]
    pub image_base64: Option<String>,
    /// URL of a label image.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl WineDetail {
    /// The wine's name, falling back to a prettified identifier.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => prettify_wine_id(&self.wine_id),
        }
    }

    /// Appellation, region and country joined for one-line display.
    pub fn region_line(&self) -> String {
        [&self.appellation, &self.region, &self.country]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

/// Resolved profile for a wine, produced by photo recognition or by text
/// resolution.
///
/// Every field is optional; the backend fills in what it could determine.
/// The same shape is sent back when adding a favorite from a resolved
/// profile, with absent fields omitted from the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WineProfile {
    /// The name as the caller supplied it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_name: Option<String>,
    /// The canonical name the backend resolved to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_name: Option<String>,
    /// Producer name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    /// Country of origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Growing region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Appellation within the region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appellation: Option<String>,
    /// Wine color, e.g. `"red"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Grape varieties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grapes: Option<Vec<String>>,
    /// Typical vintage range, e.g. `"2015-2019"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vintage_typical: Option<String>,
    /// Body descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Acidity descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acidity: Option<String>,
    /// Tannin descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tannin: Option<String>,
    /// Sweetness descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweetness: Option<String>,
    /// Oak descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oak: Option<String>,
    /// One-paragraph style description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_description: Option<String>,
    /// Backend confidence in the resolution. The backend serializes this
    /// as a string, e.g. `"0.87"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
    /// Additional notes from the resolver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Set when the backend could not match the input to any wine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_found: Option<bool>,
}

impl WineProfile {
    /// Best available name: the resolved one if present, else the input.
    pub fn display_name(&self) -> Option<&str> {
        self.resolved_name.as_deref().or(self.input_name.as_deref())
    }

    /// Whether the backend reported the wine as not found.
    pub fn is_not_found(&self) -> bool {
        self.not_found.unwrap_or(false)
    }
}

/// Result of adding a favorite from a label photo: the recognized wine,
/// plus the updated profile when the backend includes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoFavorite {
    /// The wine recognized in the photo.
    pub wine_profile: WineProfile,
    /// The user profile after the favorite was added.
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// A wine similar to another, with the backend's similarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarWine {
    /// Identifier of the similar wine.
    pub wine_id: String,
    /// Display name.
    pub name: String,
    /// Producer name.
    #[serde(default)]
    pub producer: Option<String>,
    /// Growing region.
    #[serde(default)]
    pub region: Option<String>,
    /// Similarity score; higher is more similar.
    pub score: f64,
}

/// One recommended wine extracted from an uploaded menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuWine {
    /// Identifier of the matched wine.
    pub wine_id: String,
    /// The menu line the recommendation came from.
    pub label: String,
}

/// A free-text search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Identifier of the matched wine.
    pub wine_id: String,
    /// Display name.
    pub name: String,
    /// Producer name.
    #[serde(default)]
    pub producer: Option<String>,
}

/// Aggregate insights computed from a user's favorites and tastings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    /// One-paragraph summary of the user's taste.
    pub summary: String,
    /// Most common grape varieties.
    pub top_grapes: Vec<String>,
    /// Most common countries.
    pub top_countries: Vec<String>,
    /// Most common regions.
    pub top_regions: Vec<String>,
    /// Most common vintages.
    pub top_vintages: Vec<i32>,
}

/// Turn an identifier like `chateau_margaux-2015` into
/// `Chateau Margaux 2015`.
fn prettify_wine_id(wine_id: &str) -> String {
    wine_id
        .split(['_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pref_level_wire_names() {
        assert_eq!(serde_json::to_string(&PrefLevel::Low).unwrap(), "\"low\"");
        assert_eq!(serde_json::to_string(&PrefLevel::High).unwrap(), "\"high\"");
        let parsed: PrefLevel = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, PrefLevel::Medium);
    }

    #[test]
    fn test_survey_defaults() {
        let answers = SurveyAnswers::default();
        assert!(answers.favorite_styles.is_empty());
        assert_eq!(answers.tannin_pref, PrefLevel::Medium);
        assert_eq!(answers.acidity_pref, PrefLevel::Medium);
        assert_eq!(answers.oak_pref, PrefLevel::Low);
        assert_eq!(answers.adventure_pref, PrefLevel::Medium);
    }

    #[test]
    fn test_favorite_display_name() {
        let favorite = FavoriteEntry {
            wine_id: "chateau_margaux-2015".to_string(),
            source: None,
            added_at: None,
        };
        assert_eq!(favorite.display_name(), "Chateau Margaux 2015");
    }

    #[test]
    fn test_wine_detail_display_name() {
        let mut wine = WineDetail {
            wine_id: "barolo_riserva".to_string(),
            name: Some("Barolo Riserva DOCG".to_string()),
            producer: None,
            country: None,
            region: None,
            appellation: None,
            color: None,
            grapes_line: None,
            embedding_text: None,
            image_base64: None,
            image_url: None,
        };
        assert_eq!(wine.display_name(), "Barolo Riserva DOCG");

        wine.name = None;
        assert_eq!(wine.display_name(), "Barolo Riserva");
    }

    #[test]
    fn test_region_line_skips_missing_parts() {
        let wine = WineDetail {
            wine_id: "x".to_string(),
            name: None,
            producer: None,
            country: Some("Italy".to_string()),
            region: Some("Piedmont".to_string()),
            appellation: None,
            color: None,
            grapes_line: None,
            embedding_text: None,
            image_base64: None,
            image_url: None,
        };
        assert_eq!(wine.region_line(), "Piedmont · Italy");
    }

    #[test]
    fn test_wine_profile_skips_absent_fields() {
        let profile = WineProfile {
            resolved_name: Some("Ridge Monte Bello".to_string()),
            confidence: Some("0.92".to_string()),
            ..WineProfile::default()
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"resolved_name": "Ridge Monte Bello", "confidence": "0.92"})
        );
    }

    #[test]
    fn test_user_profile_tolerates_missing_fields() {
        let bare: UserProfile = serde_json::from_str(r#"{"user_id":"spencer"}"#).unwrap();
        assert!(bare.survey_answers.is_none());
        assert!(bare.favorite_wines.is_none());

        let with_nulls: UserProfile =
            serde_json::from_str(r#"{"user_id":"spencer","survey_answers":null,"style_vec":null}"#)
                .unwrap();
        assert!(with_nulls.survey_answers.is_none());
        assert!(with_nulls.style_vec.is_none());
    }
}
