use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::error::ErrorResponse;

/// Errors raised by a [`SignatureVerifier`](super::SignatureVerifier) that could
/// not reach a verdict. The gate treats every one of them as a bad signature.
#[derive(Debug, Error)]
pub enum VerifierError {
    #[error("invalid verification key: {0}")]
    InvalidKey(String),
    /// Seam for verifiers that call out (key service, remote notarizer).
    /// The in-process `Es256Verifier` never produces it.
    #[allow(dead_code)]
    #[error("verifier backend failure: {0}")]
    Backend(String),
}

impl From<hex::FromHexError> for VerifierError {
    fn from(e: hex::FromHexError) -> Self {
        Self::InvalidKey(e.to_string())
    }
}

/// Why a request was refused by the session gate.
///
/// Every variant is terminal for the request and answers 401. The `Display`
/// output is for logs only; callers see [`AuthFailure::public_message`].
#[derive(Debug, Error)]
pub enum AuthFailure {
    #[error("authorization header missing or not a bearer credential")]
    MissingCredential,

    #[error("session token signature rejected")]
    InvalidSignature(#[source] Option<VerifierError>),

    #[error("malformed session token: {0}")]
    MalformedToken(String),

    #[error("session token is missing required claim '{0}'")]
    IncompleteClaims(&'static str),

    #[error("session token expired at {exp} (now {now})")]
    Expired { exp: i64, now: i64 },

    #[error("unexpected authentication failure: {0}")]
    UnexpectedFailure(String),
}

impl AuthFailure {
    /// Stable classification used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::InvalidSignature(_) => "invalid_signature",
            Self::MalformedToken(_) => "malformed_token",
            Self::IncompleteClaims(_) => "incomplete_claims",
            Self::Expired { .. } => "expired",
            Self::UnexpectedFailure(_) => "unexpected_failure",
        }
    }

    /// Short string returned to the caller. Malformed and incomplete tokens
    /// share the generic message with unexpected faults, and so does a
    /// verifier that failed without reaching a verdict.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingCredential => "Missing authorization header",
            Self::InvalidSignature(None) => "Invalid JWT signature",
            Self::Expired { .. } => "JWT expired",
            Self::InvalidSignature(Some(_))
            | Self::MalformedToken(_)
            | Self::IncompleteClaims(_)
            | Self::UnexpectedFailure(_) => "Authentication failed",
        }
    }
}

impl IntoResponse for AuthFailure {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new(self.public_message())),
        )
            .into_response()
    }
}
