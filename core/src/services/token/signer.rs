//! HMAC-SHA256 signing with constant-time verification

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::errors::{TokenError, TokenResult};

type HmacSha256 = Hmac<Sha256>;

/// Sign `message` with `secret`, returning the unpadded base64url digest
///
/// Deterministic: the same inputs always give the same signature.
pub fn sign(message: &str, secret: &[u8]) -> TokenResult<String> {
    let mut mac = HmacSha256::new_from_slice(secret).map_err(|e| TokenError::SigningFailed {
        message: e.to_string(),
    })?;
    mac.update(message.as_bytes());
    Ok(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
}

/// Check `expected_signature` against a fresh signature of `message`
///
/// The comparison does not short-circuit on the first differing byte.
pub fn verify(message: &str, secret: &[u8], expected_signature: &str) -> TokenResult<bool> {
    let computed = sign(message, secret)?;
    Ok(constant_time_eq::constant_time_eq(
        computed.as_bytes(),
        expected_signature.as_bytes(),
    ))
}
