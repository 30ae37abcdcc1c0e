use std::sync::Arc;

use axum::http::HeaderValue;
use tracing::debug;

use super::claims::decode_claims;
use super::error::AuthFailure;
use super::identity::Identity;
use super::verifier::SignatureVerifier;

const BEARER_PREFIX: &str = "Bearer ";

/// Session token gate.
///
/// Order of checks is fixed: credential → signature → payload → expiry.
/// The payload is never decoded before the verifier has accepted the token.
/// Nothing is cached between calls.
#[derive(Clone)]
pub struct SessionGate {
    verifier: Arc<dyn SignatureVerifier>,
}

impl std::fmt::Debug for SessionGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGate").finish_non_exhaustive()
    }
}

impl SessionGate {
    pub fn new(verifier: Arc<dyn SignatureVerifier>) -> Self {
        Self { verifier }
    }

    /// Authenticate an `Authorization` header value against the current clock.
    pub async fn authenticate(
        &self,
        authorization: Option<&HeaderValue>,
    ) -> Result<Identity, AuthFailure> {
        self.authenticate_at(authorization, chrono::Utc::now().timestamp())
            .await
    }

    /// Same as [`authenticate`](Self::authenticate) with an explicit `now`
    /// (unix seconds). A token with `exp == now` is still accepted.
    pub async fn authenticate_at(
        &self,
        authorization: Option<&HeaderValue>,
        now: i64,
    ) -> Result<Identity, AuthFailure> {
        let token = bearer_token(authorization)?;

        match self.verifier.verify(token).await {
            Ok(true) => {}
            Ok(false) => return Err(AuthFailure::InvalidSignature(None)),
            Err(e) => return Err(AuthFailure::InvalidSignature(Some(e))),
        }

        let claims = decode_claims(token)?;

        if claims.exp < now {
            return Err(AuthFailure::Expired {
                exp: claims.exp,
                now,
            });
        }

        // No organization membership check: a valid signature is the proof.
        let identity = Identity::from(claims);
        debug!(
            user_id = %identity.user_id,
            organization_id = %identity.organization_id,
            session_type = %identity.session_type,
            "session token accepted"
        );

        Ok(identity)
    }
}

fn bearer_token(authorization: Option<&HeaderValue>) -> Result<&str, AuthFailure> {
    authorization
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix(BEARER_PREFIX))
        .ok_or(AuthFailure::MissingCredential)
}
