//! Backend health check.

use crate::client::Client;
use crate::envelope::{PayloadShape, decode_payload};
use crate::error::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

impl Client {
    /// Check that the backend is reachable.
    ///
    /// Returns the status string the backend reports. Older deployments
    /// answer with a non-JSON body; any 2xx that does not parse is
    /// reported as `"ok"`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend is unreachable or answers
    /// non-2xx.
    pub async fn health(&self) -> Result<String> {
        let bytes = self.get_raw("health").await?;
        let status = decode_payload::<HealthResponse>(&bytes, PayloadShape::Either)
            .map(|h| h.status)
            .unwrap_or_else(|_| "ok".to_string());
        Ok(status)
    }
}
