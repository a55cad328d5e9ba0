//! Transaction as returned by the gateway.
//!
//! Data model only; field names follow the gateway's dashed wire names so the
//! struct deserializes from any serde format carrying them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::request::{TransactionSource, TransactionType};

/// Lifecycle status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    AuthorizationExpired,
    Authorizing,
    Authorized,
    GatewayRejected,
    Failed,
    ProcessorDeclined,
    Settled,
    SettlementConfirmed,
    SettlementDeclined,
    SettlementPending,
    Settling,
    SubmittedForSettlement,
    Voided,
    /// Any status this client does not know about.
    #[serde(other)]
    Unrecognized,
}

impl TransactionStatus {
    /// Whether the transaction was refused and will never move money.
    pub fn is_declined(&self) -> bool {
        matches!(
            self,
            TransactionStatus::GatewayRejected
                | TransactionStatus::Failed
                | TransactionStatus::ProcessorDeclined
                | TransactionStatus::SettlementDeclined
        )
    }

    /// Whether funds have been or are being captured.
    pub fn is_settling_or_settled(&self) -> bool {
        matches!(
            self,
            TransactionStatus::SubmittedForSettlement
                | TransactionStatus::Settling
                | TransactionStatus::SettlementPending
                | TransactionStatus::Settled
                | TransactionStatus::SettlementConfirmed
        )
    }
}

/// Kind of payment method used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentInstrumentType {
    AndroidPayCard,
    ApplePayCard,
    CreditCard,
    MasterpassCard,
    PaypalAccount,
    VenmoAccount,
    VisaCheckoutCard,
    #[serde(other)]
    Unrecognized,
}

/// Transaction returned by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Transaction {
    pub id: String,
    pub status: TransactionStatus,
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    pub currency_iso_code: Option<String>,
    pub amount: Option<Decimal>,
    pub order_id: Option<String>,
    pub payment_method_token: Option<String>,
    pub merchant_account_id: Option<String>,
    pub plan_id: Option<String>,
    pub subscription_id: Option<String>,
    pub tax_amount: Option<Decimal>,
    #[serde(default)]
    pub tax_exempt: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub processor_response_code: Option<String>,
    pub processor_response_text: Option<String>,
    pub processor_authorization_code: Option<String>,
    pub payment_instrument_type: Option<PaymentInstrumentType>,
    pub transaction_source: Option<TransactionSource>,
    pub purchase_order_number: Option<String>,
}
