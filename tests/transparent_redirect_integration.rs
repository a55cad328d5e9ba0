//! Integration tests for the transparent redirect flow.
//!
//! These tests verify the end-to-end flow through the public API:
//! 1. Gateway is built from configuration
//! 2. A transaction descriptor is encoded and signed
//! 3. The descriptor verifies against the same credential pair
//! 4. Gateway callbacks are validated and parsed

use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

use rust_decimal::Decimal;

use braintree_redirect::adapters::{Credentials, HmacSigner, TransparentRedirectGateway};
use braintree_redirect::config::{Environment, GatewayConfig};
use braintree_redirect::domain::transaction::{
    CustomerRequest, PaypalOptions, TransactionOptions, TransactionRequest, TransactionType,
};
use braintree_redirect::domain::transparent_redirect::{
    RedirectCodec, RedirectError, RedirectKind, SignedPayload, TransactionRedirectData,
};
use braintree_redirect::ports::PayloadSigner;

// =============================================================================
// Test Infrastructure
// =============================================================================

const VALID_QUERY: &str = "braintree=hello&hash=b20aae7639bef32e77961ab47336c618734c7517";

fn gateway() -> TransparentRedirectGateway {
    let config = GatewayConfig::new(Environment::Sandbox, "merch-id", "pub-key", "priv-key");
    TransparentRedirectGateway::from_config(&config)
}

fn signer() -> HmacSigner {
    HmacSigner::new(&Credentials::new("pub-key", "priv-key"))
}

fn fixture_transaction() -> TransactionRedirectData {
    TransactionRedirectData {
        redirect_url: "http://call.me".to_string(),
        transaction: TransactionRequest {
            transaction_type: Some(TransactionType::Sale),
            amount: Some(Decimal::new(2000, 2)),
            order_id: Some("1541415277280".to_string()),
            options: Some(TransactionOptions {
                submit_for_settlement: true,
                store_in_vault: true,
                ..Default::default()
            }),
            customer: Some(CustomerRequest {
                id: Some("1234".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        },
    }
}

// =============================================================================
// Callback Validation
// =============================================================================

#[test]
fn validate_query_without_hash_is_structural_error() {
    let result = gateway().validate_query_string("no-hash");

    let err = result.unwrap_err();
    assert_eq!(err, RedirectError::MissingHash);
    assert_eq!(err.to_string(), "query is incorrect and has no hash parameter");
}

#[test]
fn validate_query_with_invalid_signature_is_false() {
    let result = gateway().validate_query_string("braintree=hello&hash=aaaaabbbbcccc");
    assert_eq!(result, Ok(false));
}

#[test]
fn validate_query_with_valid_signature_is_true() {
    let result = gateway().validate_query_string(VALID_QUERY);
    assert_eq!(result, Ok(true));
}

#[test]
fn validate_rejects_appended_parameters() {
    let tampered = format!("{}&amount=1.00", VALID_QUERY);
    assert_eq!(gateway().validate_query_string(&tampered), Ok(false));
}

#[test]
fn validate_rejects_other_private_key() {
    let config = GatewayConfig::new(Environment::Sandbox, "merch-id", "pub-key", "other-key");
    let other = TransparentRedirectGateway::from_config(&config);

    assert_eq!(other.validate_query_string(VALID_QUERY), Ok(false));
}

#[test]
fn parse_valid_callback_returns_parameters() {
    let callback = gateway().parse_query_string(VALID_QUERY).unwrap();
    assert_eq!(callback.get("braintree"), Some("hello"));
}

#[test]
fn parse_gateway_style_callback() {
    let signer = signer();
    let content = "http_status=200&id=6kdj469tw7yck32j&kind=create_transaction";
    let query = format!("{}&hash={}", content, signer.sign(content));

    let callback = gateway().parse_query_string(&query).unwrap();

    assert!(callback.is_success());
    assert_eq!(callback.id(), Some("6kdj469tw7yck32j"));
    assert_eq!(callback.kind(), Some(RedirectKind::CreateTransaction));
}

// =============================================================================
// Descriptor Encoding
// =============================================================================

#[test]
fn transaction_data_contains_expected_pairs() {
    let data = gateway().transaction_data(&fixture_transaction()).unwrap();

    for expected in [
        "kind=create_transaction",
        "redirect_url=http%3A%2F%2Fcall.me",
        "transaction%5Bamount%5D=20.00",
        "transaction%5Boptions%5D%5Bsubmit_for_settlement%5D=1",
        "transaction%5Boptions%5D%5Bstore_in_vault%5D=1",
        "transaction%5Bcustomer%5D%5Bid%5D=1234",
        "transaction%5Btype%5D=sale",
        "transaction%5Border_id%5D=1541415277280",
    ] {
        assert!(
            data.contains(expected),
            "expected data to contain '{}' but didn't: {}",
            expected,
            data
        );
    }
}

#[test]
fn transaction_data_signature_verifies() {
    let data = gateway().transaction_data(&fixture_transaction()).unwrap();

    let split: Vec<&str> = data.split('|').collect();
    assert_eq!(split.len(), 2, "expected 2 pieces, got: {}", split.len());
    assert!(signer().verify(split[0], split[1]));
}

#[test]
fn transaction_data_omits_unset_option_flags() {
    let data = gateway().transaction_data(&fixture_transaction()).unwrap();

    assert!(!data.contains("hold_in_escrow"));
    assert!(!data.contains("store_in_vault_on_success"));
    assert!(!data.contains("tax_exempt"));
}

#[test]
fn empty_options_produce_no_options_group() {
    let data = TransactionRedirectData {
        redirect_url: "http://call.me".to_string(),
        transaction: TransactionRequest {
            options: Some(TransactionOptions {
                paypal: Some(PaypalOptions::default()),
                ..Default::default()
            }),
            ..Default::default()
        },
    };

    let encoded = gateway().transaction_data(&data).unwrap();
    let signed = SignedPayload::parse(&encoded).unwrap();

    assert_eq!(
        signed.content,
        "kind=create_transaction&redirect_url=http%3A%2F%2Fcall.me"
    );
}

#[test]
fn encoding_is_deterministic() {
    let gateway = gateway();
    let first = gateway.transaction_data(&fixture_transaction()).unwrap();
    let second = gateway.transaction_data(&fixture_transaction()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn invalid_custom_field_key_fails_whole_encode() {
    let mut custom_fields = BTreeMap::new();
    custom_fields.insert("bad]key".to_string(), "x".to_string());
    let mut data = fixture_transaction();
    data.transaction.custom_fields = custom_fields;

    let result = gateway().transaction_data(&data);

    assert_eq!(
        result,
        Err(RedirectError::InvalidFormKey("bad]key".to_string()))
    );
}

#[test]
fn empty_custom_field_values_are_omitted() {
    let mut custom_fields = BTreeMap::new();
    custom_fields.insert("note".to_string(), String::new());
    let mut data = fixture_transaction();
    data.transaction.custom_fields = custom_fields;

    let encoded = gateway().transaction_data(&data).unwrap();

    assert!(!encoded.contains("custom_fields"), "got: {}", encoded);
    assert_eq!(encoded, gateway().transaction_data(&fixture_transaction()).unwrap());
}

#[test]
fn custom_field_key_with_delimiters_is_encoded() {
    let mut custom_fields = BTreeMap::new();
    custom_fields.insert("a=b".to_string(), "x".to_string());
    let mut data = fixture_transaction();
    data.transaction.custom_fields = custom_fields;

    let encoded = gateway().transaction_data(&data).unwrap();

    assert!(encoded.contains("transaction%5Bcustom_fields%5D%5Ba%3Db%5D=x"));
    let signed = SignedPayload::parse(&encoded).unwrap();
    assert!(signer().verify(&signed.content, &signed.signature));
}

#[test]
fn form_url_points_at_transparent_redirect_requests() {
    let gateway = gateway();
    assert_eq!(
        gateway.form_url(),
        format!("{}/transparent_redirect_requests", gateway.merchant_url())
    );
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn codec_is_shareable_across_threads() {
    let codec = Arc::new(RedirectCodec::new(Arc::new(signer())));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let codec = Arc::clone(&codec);
            thread::spawn(move || codec.validate_query_string(VALID_QUERY))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(true));
    }
}
