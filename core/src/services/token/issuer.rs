//! Token assembly: `header.payload.signature`

use crate::domain::entities::token::{Header, Payload};
use crate::errors::TokenResult;

use super::codec::encode_segment;
use super::signer::sign;

/// Encode header and payload into the unsigned `header.payload` input
pub fn signing_input(header: &Header, payload: &Payload) -> TokenResult<String> {
    Ok(format!(
        "{}.{}",
        encode_segment(header)?,
        encode_segment(payload)?
    ))
}

/// Build a signed three-segment token
pub fn issue(header: &Header, payload: &Payload, secret: &[u8]) -> TokenResult<String> {
    let unsigned = signing_input(header, payload)?;
    let signature = sign(&unsigned, secret)?;
    Ok(format!("{unsigned}.{signature}"))
}
