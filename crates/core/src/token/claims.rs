//! Signature-free expiry inspection for compact JWT access tokens.
//!
//! Freshness is a local decision: only the `exp` claim is read, and the
//! token signature is never verified. The administered service verifies
//! signatures itself on every call; a forged expiry here buys nothing but a
//! rejected request.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use serde::Deserialize;

use super::CredentialRecord;

#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default)]
    exp: Option<i64>,
}

/// Extract the expiry instant in milliseconds since the epoch from a compact
/// JWT. Returns `None` for anything that is not a three-segment token with a
/// base64url payload carrying a numeric `exp` claim.
pub fn token_expiry_ms(token: &str) -> Option<i64> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    let payload = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    let claims: Claims = serde_json::from_slice(&payload).ok()?;
    claims.exp?.checked_mul(1000)
}

/// True when the record's access token expires strictly after `now_ms`.
///
/// A token that cannot be decoded, or that lacks an expiry claim, is never
/// fresh; that is a validation outcome, not an error.
pub fn is_fresh_at(record: &CredentialRecord, now_ms: i64) -> bool {
    matches!(token_expiry_ms(&record.access_token), Some(exp_ms) if exp_ms > now_ms)
}

/// [`is_fresh_at`] against the current wall clock.
pub fn is_fresh(record: &CredentialRecord) -> bool {
    is_fresh_at(record, Utc::now().timestamp_millis())
}
