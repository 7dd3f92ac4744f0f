//! Access token expiry inspection.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use jiff::Timestamp;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Claims {
    exp: i64,
}

/// Expiry encoded in a JWT access token, without verifying its signature.
///
/// Returns `None` for tokens that are not JWTs or carry no `exp` claim.
pub(crate) fn expires_at(token: &str) -> Option<Timestamp> {
    let mut segments = token.split('.');

    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return None;
    };

    let payload = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Claims = serde_json::from_slice(&payload).ok()?;

    Timestamp::from_second(claims.exp).ok()
}

/// Unsigned JWT carrying only an `exp` claim.
#[cfg(test)]
pub(crate) fn token_expiring_at(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"staff","exp":{exp}}}"#));

    format!("{header}.{payload}.signature")
}
