//! Response-envelope handling.
//!
//! The backend has served two body shapes for the same logical endpoints
//! over time: a bare payload, and a newer `{"status": ..., "data": ...}`
//! envelope. Each endpoint declares which shape it expects via
//! [`PayloadShape`]; [`PayloadShape::Either`] keeps the historical
//! double-parse for endpoints where deployed backends still disagree.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// Success envelope used by the newer backend contract.
///
/// `status` is informational only and never interpreted; the logical
/// payload lives in `data`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    /// Reported status string, e.g. `"ok"`.
    pub status: String,
    /// The logical payload.
    pub data: T,
}

/// Failure envelope attached to non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub(crate) error: ServerError,
}

/// The `error` object inside an [`ErrorEnvelope`].
#[derive(Debug, Deserialize)]
pub(crate) struct ServerError {
    pub(crate) code: i64,
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) details: Option<BTreeMap<String, String>>,
}

/// How an endpoint's success payload is laid out on the wire.
///
/// Declared once per endpoint, next to its response type. Prefer an exact
/// shape where the contract is settled. `Either` re-introduces a known
/// ambiguity: a bare payload that happens to carry its own `data` field is
/// unwrapped as if enveloped. It is reserved for endpoints the deployed
/// fleet still serves both ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    /// The body is the payload itself.
    Bare,
    /// The body wraps the payload in `{"status": ..., "data": ...}`.
    Enveloped,
    /// Envelope first, bare payload second.
    Either,
}

/// Extract the logical payload from a response body.
///
/// With [`PayloadShape::Either`] the envelope parse is attempted first and
/// the bare parse second; when both fail, the error from the bare attempt
/// is returned.
pub fn decode_payload<T: DeserializeOwned>(
    bytes: &[u8],
    shape: PayloadShape,
) -> Result<T, serde_json::Error> {
    match shape {
        PayloadShape::Bare => serde_json::from_slice(bytes),
        PayloadShape::Enveloped => serde_json::from_slice::<Envelope<T>>(bytes).map(|e| e.data),
        PayloadShape::Either => match serde_json::from_slice::<Envelope<T>>(bytes) {
            Ok(envelope) => Ok(envelope.data),
            Err(_) => serde_json::from_slice(bytes),
        },
    }
}
