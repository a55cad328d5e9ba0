//! Payload signer port for transparent redirect authentication.
//!
//! Defines the contract for producing and checking the keyed signatures that
//! protect transparent redirect descriptors and callback query strings.
//!
//! # Design
//!
//! - **Pure**: signing is a deterministic function of content and credentials
//! - **Infallible**: malformed input simply fails to verify
//! - **Shareable**: implementations are immutable and `Send + Sync`

/// Port for keyed-hash signing of redirect payloads.
///
/// Implementations hold a credential pair for their whole lifetime and never
/// expose the private half.
pub trait PayloadSigner: Send + Sync {
    /// Public identifier of the credential pair.
    fn public_key(&self) -> &str;

    /// Sign `content`, returning a fixed-length lower-case hex digest.
    fn sign(&self, content: &str) -> String;

    /// Check `claimed_signature` against the signature of `content`.
    ///
    /// The comparison must be constant-time with respect to the expected
    /// signature.
    fn verify(&self, content: &str, claimed_signature: &str) -> bool;
}
