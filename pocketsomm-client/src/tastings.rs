//! Tasting-log operations.

use crate::client::Client;
use crate::envelope::PayloadShape;
use crate::error::Result;
use crate::profile::UserUpdateResponse;
use crate::types::UserProfile;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct AddTastingRequest<'a> {
    wine_id: &'a str,
    rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
}

impl Client {
    /// Record a tasting and return the updated profile.
    ///
    /// Absent `context` and `notes` are omitted from the request body
    /// entirely rather than sent as `null`.
    ///
    /// # Arguments
    ///
    /// * `wine_id` - Identifier of the tasted wine.
    /// * `rating` - Rating on the backend's scale, typically 0 to 5.
    /// * `context` - Where or with what the wine was tasted.
    /// * `notes` - Free-form notes.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the response cannot be
    /// decoded.
    pub async fn add_tasting(
        &self,
        user_id: &str,
        wine_id: &str,
        rating: f64,
        context: Option<&str>,
        notes: Option<&str>,
    ) -> Result<UserProfile> {
        let path = format!("user/{user_id}/tasting");
        let body = AddTastingRequest {
            wine_id,
            rating,
            context,
            notes,
        };
        let response: UserUpdateResponse = self.post_json(&path, &body, PayloadShape::Bare).await?;
        Ok(response.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_absent_optional_fields() {
        let body = AddTastingRequest {
            wine_id: "chateau_x",
            rating: 4.5,
            context: None,
            notes: Some("great"),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"wine_id": "chateau_x", "rating": 4.5, "notes": "great"})
        );
    }

    #[test]
    fn test_request_keeps_present_optional_fields() {
        let body = AddTastingRequest {
            wine_id: "chateau_x",
            rating: 3.0,
            context: Some("dinner"),
            notes: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"wine_id": "chateau_x", "rating": 3.0, "context": "dinner"})
        );
    }
}
