/// Factory: build `SessionGate` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::session::{Es256Verifier, SessionGate, VerifierError};

pub fn build_session_gate(config: &Config) -> Result<Arc<SessionGate>, VerifierError> {
    let verifier = Es256Verifier::from_hex(&config.session_verifier_public_key)?;
    tracing::info!(verifier = ?verifier, "session verifier key loaded");

    Ok(Arc::new(SessionGate::new(Arc::new(verifier))))
}
