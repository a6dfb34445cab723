//! User profile, survey and insights operations.

use crate::client::Client;
use crate::envelope::{PayloadShape, decode_payload};
use crate::error::{ApiError, Result};
use crate::types::{Insights, SurveyAnswers, UserProfile};
use serde::Deserialize;

/// Profile wrapped in a `user` key, as newer deployments serve it.
#[derive(Debug, Deserialize)]
struct UserWrapper {
    user: UserProfile,
}

/// Response shape shared by the mutations that return the updated user.
/// The sibling `status` field is not consumed, so it is not declared;
/// serde skips unknown fields.
#[derive(Debug, Deserialize)]
pub(crate) struct UserUpdateResponse {
    pub(crate) user: UserProfile,
}

impl Client {
    /// Fetch a user's taste profile.
    ///
    /// Deployed backends disagree on this endpoint: newer ones wrap the
    /// profile in `{"user": ...}`, older ones return it bare, and either
    /// may sit inside the response envelope. All four combinations are
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or no accepted shape
    /// matches the body.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// use pocketsomm_client::{Client, Config};
    ///
    /// let client = Client::new(Config::from_env())?;
    /// let profile = client.fetch_user_profile("spencer").await?;
    /// println!("favorites: {}", profile.favorite_wines.unwrap_or_default().len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_user_profile(&self, user_id: &str) -> Result<UserProfile> {
        let bytes = self.get_raw(&format!("user/{user_id}")).await?;

        if let Ok(wrapped) = decode_payload::<UserWrapper>(&bytes, PayloadShape::Either) {
            return Ok(wrapped.user);
        }
        decode_payload(&bytes, PayloadShape::Either).map_err(ApiError::Decode)
    }

    /// Submit taste-survey answers and return the updated profile.
    ///
    /// Answers are sent as-is; the backend recomputes the style embedding
    /// from them.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the response cannot be
    /// decoded.
    pub async fn submit_survey(
        &self,
        user_id: &str,
        answers: &SurveyAnswers,
    ) -> Result<UserProfile> {
        let path = format!("user/{user_id}/survey");
        let response: UserUpdateResponse =
            self.post_json(&path, answers, PayloadShape::Bare).await?;
        Ok(response.user)
    }

    /// Fetch aggregate insights computed from the user's favorites and
    /// tastings.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the response cannot be
    /// decoded.
    pub async fn fetch_user_insights(&self, user_id: &str) -> Result<Insights> {
        self.get_json(&format!("user/{user_id}/insights"), PayloadShape::Either)
            .await
    }
}
