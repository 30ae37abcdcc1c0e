use serde::Serialize;

use super::claims::TokenClaims;

/// Authenticated principal attached to a request by the session gate.
///
/// `organization_id` is the subject's own sub-organization, taken from the
/// token as-is. Expiry is already enforced and not carried here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub user_id: String,
    pub organization_id: String,
    pub session_type: String,
    pub public_key: String,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
            organization_id: claims.organization_id,
            session_type: claims.session_type,
            public_key: claims.public_key,
        }
    }
}
