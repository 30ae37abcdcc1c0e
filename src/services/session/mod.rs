/*!
 * Session token authentication
 *
 * Responsibility:
 * - Bearer session token の検証 (署名 → payload → exp)
 * - 成功時に Identity を返す。HTTP への配線は middleware 側
 */
mod claims;
mod error;
mod factory;
mod gate;
mod identity;
mod verifier;

#[cfg(test)]
pub mod test_support;

pub use error::{AuthFailure, VerifierError};
pub use factory::build_session_gate;
pub use gate::SessionGate;
pub use identity::Identity;
pub use verifier::{Es256Verifier, SignatureVerifier};
