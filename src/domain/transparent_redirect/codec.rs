//! Transparent redirect codec.
//!
//! Encodes signed request descriptors and validates signed callback queries.
//! Every call is an independent pure transformation parameterized by the
//! signer's credential pair.

use std::sync::Arc;

use crate::ports::PayloadSigner;

use super::callback::{split_hash, CallbackQuery};
use super::descriptor::{RequestDescriptor, SignedPayload};
use super::errors::RedirectError;
use super::form::FormValue;
use super::kind::RedirectKind;

/// Codec for transparent redirect descriptors and callbacks.
#[derive(Clone)]
pub struct RedirectCodec {
    signer: Arc<dyn PayloadSigner>,
}

impl RedirectCodec {
    pub fn new(signer: Arc<dyn PayloadSigner>) -> Self {
        Self { signer }
    }

    /// Signs a descriptor's query string.
    ///
    /// # Errors
    ///
    /// Propagates encoding errors from [`RequestDescriptor::to_query_string`].
    pub fn sign_descriptor(
        &self,
        descriptor: &RequestDescriptor<'_>,
    ) -> Result<SignedPayload, RedirectError> {
        let content = descriptor.to_query_string()?;
        let signature = self.signer.sign(&content);
        Ok(SignedPayload { content, signature })
    }

    /// Builds the `content|signature` value for the redirect form.
    ///
    /// # Encoding Steps
    ///
    /// 1. Flatten the payload into bracket-notation pairs
    /// 2. Prepend `kind` and `redirect_url`
    /// 3. Percent-encode and join with `&`
    /// 4. Sign the query string
    /// 5. Append `|` and the signature
    ///
    /// # Errors
    ///
    /// - `InvalidRedirectUrl` - redirect URL is empty
    /// - `InvalidFormKey` - payload contains an unencodable key
    pub fn build_request_descriptor(
        &self,
        kind: RedirectKind,
        redirect_url: &str,
        payload: &FormValue,
    ) -> Result<String, RedirectError> {
        let descriptor = RequestDescriptor::new(kind, redirect_url, payload);
        let signed = self.sign_descriptor(&descriptor)?;

        tracing::debug!(
            kind = %kind,
            content_len = signed.content.len(),
            "Built transparent redirect descriptor"
        );

        Ok(signed.encode())
    }

    /// Checks that an encoded descriptor carries a valid signature.
    ///
    /// Returns `false` for anything that is not `content|signature`.
    pub fn verify_descriptor(&self, descriptor: &str) -> bool {
        SignedPayload::parse(descriptor)
            .map(|signed| self.signer.verify(&signed.content, &signed.signature))
            .unwrap_or(false)
    }

    /// Validates the signature of a callback query string.
    ///
    /// A well-formed query with a wrong signature yields `Ok(false)`; that is
    /// the expected outcome for a forged callback and is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RedirectError::MissingHash` if the query has no `hash`
    /// parameter.
    pub fn validate_query_string(&self, query: &str) -> Result<bool, RedirectError> {
        let (content, claimed_signature) = split_hash(query).ok_or_else(|| {
            tracing::warn!(
                query_len = query.len(),
                "Transparent redirect callback without hash parameter - malformed or tampered"
            );
            RedirectError::MissingHash
        })?;

        let valid = self.signer.verify(content, claimed_signature);
        if !valid {
            tracing::warn!(
                content_len = content.len(),
                "Invalid transparent redirect callback signature"
            );
        }

        Ok(valid)
    }

    /// Validates a callback and decodes its parameters.
    ///
    /// # Errors
    ///
    /// - `MissingHash` - no `hash` parameter
    /// - `InvalidSignature` - hash does not match the content
    /// - `InvalidQueryEncoding` - a parameter is not valid UTF-8
    pub fn parse_query_string(&self, query: &str) -> Result<CallbackQuery, RedirectError> {
        if !self.validate_query_string(query)? {
            return Err(RedirectError::InvalidSignature);
        }

        // Validation succeeded, so the split is present
        let (content, _) = split_hash(query).ok_or(RedirectError::MissingHash)?;
        CallbackQuery::from_content(content)
    }
}

impl std::fmt::Debug for RedirectCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedirectCodec")
            .field("public_key", &self.signer.public_key())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Mutex;

    use crate::domain::transparent_redirect::form::FormBuilder;

    /// Signer that reverses the content; enough to exercise the codec
    /// without a real MAC.
    struct ReversingSigner;

    impl PayloadSigner for ReversingSigner {
        fn public_key(&self) -> &str {
            "reversing"
        }

        fn sign(&self, content: &str) -> String {
            content.chars().rev().collect()
        }

        fn verify(&self, content: &str, claimed_signature: &str) -> bool {
            self.sign(content) == claimed_signature
        }
    }

    fn codec() -> RedirectCodec {
        RedirectCodec::new(Arc::new(ReversingSigner))
    }

    // ══════════════════════════════════════════════════════════════
    // Encode Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn descriptor_is_content_pipe_signature() {
        let payload = FormBuilder::new().text("customer_id", Some("c1")).build();

        let descriptor = codec()
            .build_request_descriptor(RedirectKind::UpdateCustomer, "http://x", &payload)
            .unwrap();

        let content = "kind=update_customer&redirect_url=http%3A%2F%2Fx&customer_id=c1";
        let signature: String = content.chars().rev().collect();
        assert_eq!(descriptor, format!("{}|{}", content, signature));
    }

    #[test]
    fn descriptor_verifies_with_same_signer() {
        let payload = FormBuilder::new().build();
        let codec = codec();

        let descriptor = codec
            .build_request_descriptor(RedirectKind::CreateCustomer, "http://x", &payload)
            .unwrap();

        assert!(codec.verify_descriptor(&descriptor));
        assert!(!codec.verify_descriptor(&descriptor.replace("create", "update")));
        assert!(!codec.verify_descriptor("no-separator"));
    }

    #[test]
    fn encode_error_emits_nothing() {
        let payload = FormBuilder::new().build();

        let result =
            codec().build_request_descriptor(RedirectKind::CreateTransaction, "", &payload);

        assert_eq!(result, Err(RedirectError::InvalidRedirectUrl));
    }

    // ══════════════════════════════════════════════════════════════
    // Validate Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn validate_missing_hash_is_error() {
        assert_eq!(
            codec().validate_query_string("no-hash"),
            Err(RedirectError::MissingHash)
        );
    }

    #[test]
    fn validate_wrong_signature_is_false_not_error() {
        assert_eq!(codec().validate_query_string("a=1&hash=nope"), Ok(false));
    }

    #[test]
    fn validate_correct_signature_is_true() {
        assert_eq!(codec().validate_query_string("a=1&hash=1=a"), Ok(true));
    }

    // ══════════════════════════════════════════════════════════════
    // Parse Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn parse_returns_params_of_valid_callback() {
        let content = "http_status=200&id=tr1";
        let signature: String = content.chars().rev().collect();
        let query = format!("{}&hash={}", content, signature);

        let callback = codec().parse_query_string(&query).unwrap();

        assert_eq!(callback.http_status(), Some(200));
        assert_eq!(callback.id(), Some("tr1"));
        assert_eq!(callback.get("hash"), None);
    }

    #[test]
    fn parse_invalid_signature_is_error() {
        let result = codec().parse_query_string("http_status=200&hash=forged");
        assert_eq!(result, Err(RedirectError::InvalidSignature));
    }

    #[test]
    fn parse_missing_hash_is_error() {
        let result = codec().parse_query_string("http_status=200");
        assert_eq!(result, Err(RedirectError::MissingHash));
    }

    // ══════════════════════════════════════════════════════════════
    // Logging Tests
    // ══════════════════════════════════════════════════════════════

    /// Log sink shared with the fmt subscriber.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let result = tracing::subscriber::with_default(subscriber, f);
        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        (result, output)
    }

    #[test]
    fn encode_log_carries_no_key_material() {
        let payload = FormBuilder::new().text("customer_id", Some("c1")).build();

        let (result, logs) = with_captured_logs(|| {
            codec().build_request_descriptor(RedirectKind::CreateCustomer, "http://x", &payload)
        });

        assert!(result.is_ok());
        assert!(logs.contains("Built transparent redirect descriptor"));
        assert!(logs.contains("kind=create_customer"));
        assert!(!logs.contains("reversing"), "public key leaked: {}", logs);
        assert!(!logs.contains("public_key"), "public key leaked: {}", logs);
    }

    #[test]
    fn validate_logs_carry_no_key_material() {
        let (_, logs) = with_captured_logs(|| {
            let _ = codec().validate_query_string("no-hash");
            let _ = codec().validate_query_string("a=1&hash=forged");
        });

        assert!(logs.contains("without hash parameter"));
        assert!(logs.contains("Invalid transparent redirect callback signature"));
        assert!(!logs.contains("reversing"), "public key leaked: {}", logs);
        assert!(!logs.contains("forged"), "claimed signature leaked: {}", logs);
    }

    #[test]
    fn debug_shows_only_public_key() {
        assert_eq!(
            format!("{:?}", codec()),
            "RedirectCodec { public_key: \"reversing\" }"
        );
    }
}
