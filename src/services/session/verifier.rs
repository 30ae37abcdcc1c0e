//! Signature verification boundary for session tokens.
//!
//! The gate only asks "is this signature valid?"; how the answer is obtained is
//! up to the implementation behind [`SignatureVerifier`].
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use ring::signature::{ECDSA_P256_SHA256_FIXED, UnparsedPublicKey};

use super::error::VerifierError;

#[async_trait]
pub trait SignatureVerifier: Send + Sync + 'static {
    // Returns:
    // - Ok(true)  => signature valid under the issuer key
    // - Ok(false) => signature invalid
    // - Err(_)    => no verdict (caller must treat as invalid)
    async fn verify(&self, token: &str) -> Result<bool, VerifierError>;
}

const P256_UNCOMPRESSED_LEN: usize = 65;
const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;

/// ES256 (ECDSA P-256 + SHA-256) verifier for compact JWS tokens.
///
/// The signing input is `<header>.<payload>` and the signature segment is the
/// fixed-width `r || s` encoding.
#[derive(Clone)]
pub struct Es256Verifier {
    public_key: Vec<u8>,
}

impl std::fmt::Debug for Es256Verifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Es256Verifier")
            .field("public_key", &hex::encode(&self.public_key))
            .finish()
    }
}

impl Es256Verifier {
    /// `public_key_hex` must be an uncompressed SEC1 point (`04 || X || Y`).
    pub fn from_hex(public_key_hex: &str) -> Result<Self, VerifierError> {
        let public_key = hex::decode(public_key_hex.trim())?;

        if public_key.len() != P256_UNCOMPRESSED_LEN || public_key[0] != SEC1_UNCOMPRESSED_TAG {
            return Err(VerifierError::InvalidKey(format!(
                "expected {} byte uncompressed P-256 point, got {} bytes",
                P256_UNCOMPRESSED_LEN,
                public_key.len()
            )));
        }

        Ok(Self { public_key })
    }
}

#[async_trait]
impl SignatureVerifier for Es256Verifier {
    async fn verify(&self, token: &str) -> Result<bool, VerifierError> {
        let Some((signing_input, signature_b64)) = token.rsplit_once('.') else {
            return Ok(false);
        };
        // header.payload must be exactly two segments
        if signing_input.matches('.').count() != 1 {
            return Ok(false);
        }

        let Ok(signature) = URL_SAFE_NO_PAD.decode(signature_b64) else {
            return Ok(false);
        };

        let key = UnparsedPublicKey::new(&ECDSA_P256_SHA256_FIXED, &self.public_key);
        Ok(key.verify(signing_input.as_bytes(), &signature).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use ring::rand::SystemRandom;
    use ring::signature::{ECDSA_P256_SHA256_FIXED_SIGNING, EcdsaKeyPair, KeyPair};

    fn key_pair() -> (EcdsaKeyPair, SystemRandom) {
        let rng = SystemRandom::new();
        let pkcs8 = EcdsaKeyPair::generate_pkcs8(&ECDSA_P256_SHA256_FIXED_SIGNING, &rng).unwrap();
        let pair =
            EcdsaKeyPair::from_pkcs8(&ECDSA_P256_SHA256_FIXED_SIGNING, pkcs8.as_ref(), &rng)
                .unwrap();
        (pair, rng)
    }

    fn sign(pair: &EcdsaKeyPair, rng: &SystemRandom, signing_input: &str) -> String {
        let sig = pair.sign(rng, signing_input.as_bytes()).unwrap();
        format!("{signing_input}.{}", URL_SAFE_NO_PAD.encode(sig.as_ref()))
    }

    fn verifier_for(pair: &EcdsaKeyPair) -> Es256Verifier {
        Es256Verifier::from_hex(&hex::encode(pair.public_key().as_ref())).unwrap()
    }

    #[tokio::test]
    async fn accepts_token_signed_by_issuer_key() {
        let (pair, rng) = key_pair();
        let token = sign(&pair, &rng, "eyJhbGciOiJFUzI1NiJ9.eyJ1c2VyX2lkIjoidTEifQ");

        assert!(verifier_for(&pair).verify(&token).await.unwrap());
    }

    #[tokio::test]
    async fn rejects_tampered_payload() {
        let (pair, rng) = key_pair();
        let token = sign(&pair, &rng, "eyJhbGciOiJFUzI1NiJ9.eyJ1c2VyX2lkIjoidTEifQ");
        let sig = token.rsplit_once('.').unwrap().1;
        let tampered = format!("eyJhbGciOiJFUzI1NiJ9.eyJ1c2VyX2lkIjoidTIifQ.{sig}");

        assert!(!verifier_for(&pair).verify(&tampered).await.unwrap());
    }

    #[tokio::test]
    async fn rejects_token_signed_by_other_key() {
        let (issuer, _) = key_pair();
        let (attacker, rng) = key_pair();
        let token = sign(&attacker, &rng, "h.p");

        assert!(!verifier_for(&issuer).verify(&token).await.unwrap());
    }

    #[tokio::test]
    async fn wrong_shape_is_invalid_not_error() {
        let (pair, _) = key_pair();
        let verifier = verifier_for(&pair);

        for token in ["", "abc", "a.b", "a.b.c.d", "a.b.!!!"] {
            assert!(!verifier.verify(token).await.unwrap(), "token {token:?}");
        }
    }

    #[test]
    fn rejects_compressed_or_garbage_keys() {
        assert!(matches!(
            Es256Verifier::from_hex("zz"),
            Err(VerifierError::InvalidKey(_))
        ));

        let compressed = format!("02{}", "11".repeat(32));
        assert!(matches!(
            Es256Verifier::from_hex(&compressed),
            Err(VerifierError::InvalidKey(_))
        ));
    }
}
