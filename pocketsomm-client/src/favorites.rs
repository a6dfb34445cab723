//! Favorite-management operations.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use crate::client::Client;
use crate::envelope::PayloadShape;
use crate::error::Result;
use crate::profile::UserUpdateResponse;
use crate::types::{PhotoFavorite, UserProfile, WineProfile};
use serde::Serialize;

/// Content type assumed for photo uploads when the caller does not say.
const DEFAULT_IMAGE_CONTENT_TYPE: &str = "image/jpeg";

#[derive(Debug, Serialize)]
struct PhotoFavoriteRequest<'a> {
    image_base64: String,
    content_type: &'a str,
}

#[derive(Debug, Serialize)]
struct FavoriteByNameRequest<'a> {
    wine_name: &'a str,
}

#[derive(Debug, Serialize)]
struct FavoriteFromProfileRequest<'a> {
    profile: &'a WineProfile,
}

impl Client {
    /// Recognize the wine on a label photo and add it to the user's
    /// favorites in one call.
    ///
    /// The image bytes are base64-encoded into the request body.
    ///
    /// # Arguments
    ///
    /// * `image` - Raw image bytes.
    /// * `content_type` - MIME type of the image; JPEG when `None`.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the response cannot be
    /// decoded.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// use pocketsomm_client::{Client, Config};
    ///
    /// let client = Client::new(Config::from_env())?;
    /// let photo = std::fs::read("label.jpg")?;
    /// let added = client.add_favorite_from_photo("spencer", &photo, None).await?;
    /// println!("recognized: {:?}", added.wine_profile.display_name());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn add_favorite_from_photo(
        &self,
        user_id: &str,
        image: &[u8],
        content_type: Option<&str>,
    ) -> Result<PhotoFavorite> {
        let path = format!("user/{user_id}/favorite/from-photo");
        let body = PhotoFavoriteRequest {
            image_base64: BASE64.encode(image),
            content_type: content_type.unwrap_or(DEFAULT_IMAGE_CONTENT_TYPE),
        };
        self.post_json(&path, &body, PayloadShape::Bare).await
    }

    /// Add a favorite by wine name and return the updated profile.
    ///
    /// The backend resolves the name and saves the result in one step; use
    /// [`resolve_wine_by_name`](Client::resolve_wine_by_name) followed by
    /// [`add_favorite_from_profile`](Client::add_favorite_from_profile) to
    /// let the user confirm the match first.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the response cannot be
    /// decoded.
    pub async fn add_favorite_by_name(
        &self,
        user_id: &str,
        wine_name: &str,
    ) -> Result<UserProfile> {
        let path = format!("user/{user_id}/favorite/by-name");
        let body = FavoriteByNameRequest { wine_name };
        let response: UserUpdateResponse = self.post_json(&path, &body, PayloadShape::Bare).await?;
        Ok(response.user)
    }

    /// Add a favorite from an already-resolved profile.
    ///
    /// Success is any 2xx; the response body carries nothing the caller
    /// needs, and callers refresh the profile themselves afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the backend answers
    /// non-2xx.
    pub async fn add_favorite_from_profile(
        &self,
        user_id: &str,
        profile: &WineProfile,
    ) -> Result<()> {
        let path = format!("user/{user_id}/favorite/from-profile");
        let body = FavoriteFromProfileRequest { profile };
        self.post_expect_empty(&path, &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_request_encoding() {
        let body = PhotoFavoriteRequest {
            image_base64: BASE64.encode(b"fake image bytes"),
            content_type: DEFAULT_IMAGE_CONTENT_TYPE,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "image_base64": "ZmFrZSBpbWFnZSBieXRlcw==",
                "content_type": "image/jpeg",
            })
        );
    }
}
