use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Deserialize;

use super::error::AuthFailure;

/// Session token payload as sent by the issuer.
///
/// Every field is optional at the serde level so that an absent claim is
/// reported as `IncompleteClaims` instead of a generic parse error.
#[derive(Debug, Default, Deserialize)]
struct RawClaims {
    #[serde(default)]
    exp: Option<i64>,
    #[serde(default)]
    public_key: Option<String>,
    #[serde(default)]
    session_type: Option<String>,
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    organization_id: Option<String>,
}

/// Claims that passed the presence checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub session_type: String,
    pub user_id: String,
    pub organization_id: String,
    pub exp: i64,
    pub public_key: String,
}

/// Decode the payload segment of a compact token and check required claims.
///
/// Header and signature segments are not looked at here.
pub fn decode_claims(token: &str) -> Result<TokenClaims, AuthFailure> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| AuthFailure::MalformedToken("missing payload segment".to_string()))?;

    // Issuers differ on padding; accept both forms.
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AuthFailure::MalformedToken(format!("payload is not base64url: {e}")))?;

    let raw: RawClaims = serde_json::from_slice(&bytes)
        .map_err(|e| AuthFailure::MalformedToken(format!("payload is not a claims object: {e}")))?;

    let exp = raw
        .exp
        .filter(|exp| *exp != 0)
        .ok_or(AuthFailure::IncompleteClaims("exp"))?;
    let public_key = required(raw.public_key, "public_key")?;
    let session_type = required(raw.session_type, "session_type")?;
    let user_id = required(raw.user_id, "user_id")?;
    let organization_id = required(raw.organization_id, "organization_id")?;

    Ok(TokenClaims {
        session_type,
        user_id,
        organization_id,
        exp,
        public_key,
    })
}

fn required(value: Option<String>, name: &'static str) -> Result<String, AuthFailure> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(AuthFailure::IncompleteClaims(name))
}
