//! HMAC-SHA1 payload signer.
//!
//! Implements the `PayloadSigner` port with Braintree's transparent redirect
//! scheme: the HMAC key is the SHA-1 digest of the private key, and the
//! signature is the hex-encoded HMAC-SHA1 of the content.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString, SecretVec};
use sha1::{Digest, Sha1};
use subtle::ConstantTimeEq;

use crate::config::GatewayConfig;
use crate::ports::PayloadSigner;

type HmacSha1 = Hmac<Sha1>;

/// Public/private key pair issued by the gateway.
#[derive(Debug, Clone)]
pub struct Credentials {
    public_key: String,
    private_key: SecretString,
}

impl Credentials {
    /// Create a credential pair.
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: SecretString::new(private_key.into()),
        }
    }

    /// Take the credential pair from gateway configuration.
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self {
            public_key: config.public_key.clone(),
            private_key: config.private_key.clone(),
        }
    }

    /// The public key.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }
}

/// Signer for transparent redirect payloads.
///
/// The HMAC key is derived once at construction; the private key itself is
/// not retained.
pub struct HmacSigner {
    public_key: String,
    hmac_key: SecretVec<u8>,
}

impl HmacSigner {
    /// Create a signer for the given credential pair.
    pub fn new(credentials: &Credentials) -> Self {
        let digest = Sha1::digest(credentials.private_key.expose_secret().as_bytes());
        Self {
            public_key: credentials.public_key.clone(),
            hmac_key: SecretVec::new(digest.to_vec()),
        }
    }

    fn compute_signature(&self, content: &str) -> Vec<u8> {
        let mut mac = HmacSha1::new_from_slice(self.hmac_key.expose_secret())
            .expect("HMAC can take key of any size");
        mac.update(content.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

impl std::fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSigner")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

impl PayloadSigner for HmacSigner {
    fn public_key(&self) -> &str {
        &self.public_key
    }

    fn sign(&self, content: &str) -> String {
        hex::encode(self.compute_signature(content))
    }

    fn verify(&self, content: &str, claimed_signature: &str) -> bool {
        let expected = self.sign(content);
        constant_time_compare(expected.as_bytes(), claimed_signature.as_bytes())
    }
}

/// Performs constant-time comparison of two byte slices.
///
/// Only the length check short-circuits; the length of a hex digest is public.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
