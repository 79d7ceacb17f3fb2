//! Segment codec: JSON, then unpadded base64url.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::entities::token::{Header, Payload};
use crate::errors::{TokenError, TokenResult};

/// Types that may appear as a token segment
///
/// Only the fixed header and payload shapes implement this, so encode and
/// decode stay typed instead of accepting arbitrary values.
pub trait TokenSegment: Serialize + DeserializeOwned {}

impl TokenSegment for Header {}
impl TokenSegment for Payload {}

/// Serialize a segment to JSON and encode it as unpadded base64url
pub fn encode_segment<S: TokenSegment>(segment: &S) -> TokenResult<String> {
    let json = serde_json::to_vec(segment).map_err(|e| TokenError::Encoding {
        message: e.to_string(),
    })?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode unpadded base64url text and parse it as the requested segment
///
/// Only the shape is checked; field values (algorithm name, expiry) are the
/// validator's concern.
pub fn decode_segment<S: TokenSegment>(text: &str) -> TokenResult<S> {
    let bytes = URL_SAFE_NO_PAD
        .decode(text)
        .map_err(|e| TokenError::Decode {
            message: format!("invalid base64url: {e}"),
        })?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Decode {
        message: format!("invalid segment JSON: {e}"),
    })
}
