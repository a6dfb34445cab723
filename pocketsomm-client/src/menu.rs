//! Menu-PDF recommendation.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use crate::client::Client;
use crate::envelope::PayloadShape;
use crate::error::Result;
use crate::types::MenuWine;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct MenuPdfRequest {
    pdf_base64: String,
}

/// Response from menu recommendation, ignoring the sibling `status` field.
#[derive(Debug, Deserialize)]
struct MenuRecommendationResponse {
    menu_wines: Vec<MenuWine>,
}

impl Client {
    /// Upload a wine-menu PDF and get back wines from it matched to the
    /// user's taste.
    ///
    /// The PDF bytes are base64-encoded into the request body. The upload
    /// goes through the same configured transport as every other call, so
    /// it honors the client's timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the response cannot be
    /// decoded.
    pub async fn recommend_from_menu_pdf(
        &self,
        user_id: &str,
        pdf: &[u8],
    ) -> Result<Vec<MenuWine>> {
        let path = format!("user/{user_id}/menu/pdf");
        let body = MenuPdfRequest {
            pdf_base64: BASE64.encode(pdf),
        };
        let response: MenuRecommendationResponse =
            self.post_json(&path, &body, PayloadShape::Bare).await?;
        Ok(response.menu_wines)
    }
}
