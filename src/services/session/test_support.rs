//! Deterministic stand-ins for tests.
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

use super::error::VerifierError;
use super::verifier::SignatureVerifier;

#[derive(Debug, Clone, Copy)]
pub enum Verdict {
    Valid,
    Invalid,
    Error,
}

/// Verifier with a fixed verdict that records how it was called.
#[derive(Debug)]
pub struct FakeVerifier {
    verdict: Verdict,
    calls: AtomicUsize,
    last_token: Mutex<Option<String>>,
}

impl FakeVerifier {
    pub fn new(verdict: Verdict) -> Self {
        Self {
            verdict,
            calls: AtomicUsize::new(0),
            last_token: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_token(&self) -> Option<String> {
        self.last_token.lock().unwrap().clone()
    }
}

#[async_trait]
impl SignatureVerifier for FakeVerifier {
    async fn verify(&self, token: &str) -> Result<bool, VerifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_token.lock().unwrap() = Some(token.to_string());

        match self.verdict {
            Verdict::Valid => Ok(true),
            Verdict::Invalid => Ok(false),
            Verdict::Error => Err(VerifierError::Backend("verifier unavailable".into())),
        }
    }
}

/// Compact token with the given payload and a placeholder signature.
pub fn session_token(payload: &serde_json::Value) -> String {
    format!(
        "{}.{}.{}",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"ES256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(payload.to_string()),
        URL_SAFE_NO_PAD.encode("signature"),
    )
}
