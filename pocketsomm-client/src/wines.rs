//! Wine catalogue operations: detail, similarity, search and text
//! resolution.

use crate::client::Client;
use crate::envelope::PayloadShape;
use crate::error::{ApiError, Result};
use crate::types::{SearchResult, SimilarWine, WineDetail, WineProfile};
use serde::{Deserialize, Serialize};

/// Response from the similar-wines endpoint. The echoed `wine_id` sibling
/// is not consumed, so it is not declared.
#[derive(Debug, Deserialize)]
struct SimilarWinesResponse {
    similar: Vec<SimilarWine>,
}

/// Response from text resolution, ignoring the sibling `status` field.
#[derive(Debug, Deserialize)]
struct ResolveWineResponse {
    profile: WineProfile,
}

#[derive(Debug, Serialize)]
struct ResolveWineRequest<'a> {
    wine_name: &'a str,
}

impl Client {
    /// Fetch the catalogue entry for a wine.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the response cannot be
    /// decoded.
    pub async fn fetch_wine_detail(&self, wine_id: &str) -> Result<WineDetail> {
        self.get_json(&format!("wine/{wine_id}"), PayloadShape::Either)
            .await
    }

    /// Fetch wines similar to the given one.
    ///
    /// Similarity is enrichment, not core data: callers conventionally log
    /// a failure here and carry on instead of surfacing it.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the response cannot be
    /// decoded.
    pub async fn fetch_similar_wines(&self, wine_id: &str) -> Result<Vec<SimilarWine>> {
        let path = format!("wine/{wine_id}/similar");
        let response: SimilarWinesResponse = self.get_json(&path, PayloadShape::Either).await?;
        Ok(response.similar)
    }

    /// Search the catalogue by free text.
    ///
    /// An empty or whitespace-only query returns an empty result without
    /// touching the network. The query is percent-encoded into the URL.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// use pocketsomm_client::{Client, Config};
    ///
    /// let client = Client::new(Config::from_env())?;
    /// for hit in client.search_wines("barolo").await? {
    ///     println!("{}  {}", hit.wine_id, hit.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the response cannot be
    /// decoded.
    pub async fn search_wines(&self, query: &str) -> Result<Vec<SearchResult>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }
        let path = format!("wine_search?q={}", urlencoding::encode(trimmed));
        self.get_json(&path, PayloadShape::Either).await
    }

    /// Resolve a wine profile from free text without saving anything.
    ///
    /// The name is trimmed before sending; a blank name is rejected
    /// client-side with [`ApiError::InvalidRequest`]. Check
    /// [`WineProfile::is_not_found`] on the result: the backend reports an
    /// unmatched name as a successful response with `not_found` set.
    ///
    /// # Errors
    ///
    /// Returns an error when the name is blank, the request fails or the
    /// response cannot be decoded.
    pub async fn resolve_wine_by_name(&self, name: &str) -> Result<WineProfile> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ApiError::InvalidRequest(
                "wine name must not be empty".to_string(),
            ));
        }
        let body = ResolveWineRequest { wine_name: trimmed };
        let response: ResolveWineResponse = self
            .post_json("wine/resolve-text", &body, PayloadShape::Bare)
            .await?;
        Ok(response.profile)
    }
}
