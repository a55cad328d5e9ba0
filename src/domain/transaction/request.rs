//! Transaction creation request.
//!
//! Each `ToForm` implementation below is the wire table for its struct: field
//! order and wire names match what the gateway expects under
//! `transaction[...]`.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::transparent_redirect::{FormBuilder, FormValue, ToForm};

use super::address::Address;
use super::customer::{CreditCard, CustomerRequest};

/// Direction of money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Sale,
    Credit,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransactionType::Sale => "sale",
            TransactionType::Credit => "credit",
        })
    }
}

/// How the transaction was initiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionSource {
    RecurringFirst,
    Recurring,
    Moto,
    Merchant,
}

impl fmt::Display for TransactionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransactionSource::RecurringFirst => "recurring_first",
            TransactionSource::Recurring => "recurring",
            TransactionSource::Moto => "moto",
            TransactionSource::Merchant => "merchant",
        })
    }
}

/// Parameters for creating a transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionRequest {
    pub customer_id: Option<String>,
    pub transaction_type: Option<TransactionType>,
    pub amount: Option<Decimal>,
    pub order_id: Option<String>,
    pub payment_method_token: Option<String>,
    pub payment_method_nonce: Option<String>,
    pub merchant_account_id: Option<String>,
    pub plan_id: Option<String>,
    pub credit_card: Option<CreditCard>,
    pub customer: Option<CustomerRequest>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
    pub tax_amount: Option<Decimal>,
    pub tax_exempt: bool,
    pub device_data: Option<String>,
    pub options: Option<TransactionOptions>,
    pub service_fee_amount: Option<Decimal>,
    pub risk_data: Option<RiskDataRequest>,
    pub descriptor: Option<DynamicDescriptor>,
    pub channel: Option<String>,
    pub custom_fields: BTreeMap<String, String>,
    pub purchase_order_number: Option<String>,
    pub transaction_source: Option<TransactionSource>,
    pub line_items: Vec<LineItemRequest>,
}

impl ToForm for TransactionRequest {
    fn to_form(&self) -> FormValue {
        FormBuilder::new()
            .text("customer_id", self.customer_id.as_deref())
            .value("type", self.transaction_type)
            .value("amount", self.amount)
            .text("order_id", self.order_id.as_deref())
            .text("payment_method_token", self.payment_method_token.as_deref())
            .text("payment_method_nonce", self.payment_method_nonce.as_deref())
            .text("merchant_account_id", self.merchant_account_id.as_deref())
            .text("plan_id", self.plan_id.as_deref())
            .nested("credit_card", self.credit_card.as_ref())
            .nested("customer", self.customer.as_ref())
            .nested("billing", self.billing_address.as_ref())
            .nested("shipping", self.shipping_address.as_ref())
            .value("tax_amount", self.tax_amount)
            .flag("tax_exempt", self.tax_exempt)
            .text("device_data", self.device_data.as_deref())
            .nested("options", self.options.as_ref())
            .value("service_fee_amount", self.service_fee_amount)
            .nested("risk_data", self.risk_data.as_ref())
            .nested("descriptor", self.descriptor.as_ref())
            .text("channel", self.channel.as_deref())
            .map("custom_fields", &self.custom_fields)
            .text("purchase_order_number", self.purchase_order_number.as_deref())
            .value("transaction_source", self.transaction_source)
            .list("line_items", &self.line_items)
            .build()
    }
}

/// Processing options for a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionOptions {
    pub submit_for_settlement: bool,
    pub store_in_vault: bool,
    pub store_in_vault_on_success: bool,
    pub add_billing_address_to_payment_method: bool,
    pub store_shipping_address_in_vault: bool,
    pub hold_in_escrow: bool,
    pub paypal: Option<PaypalOptions>,
    pub skip_advanced_fraud_checking: bool,
    pub three_d_secure: Option<ThreeDSecureOptions>,
}

impl ToForm for TransactionOptions {
    fn to_form(&self) -> FormValue {
        FormBuilder::new()
            .flag("submit_for_settlement", self.submit_for_settlement)
            .flag("store_in_vault", self.store_in_vault)
            .flag("store_in_vault_on_success", self.store_in_vault_on_success)
            .flag(
                "add_billing_address_to_payment_method",
                self.add_billing_address_to_payment_method,
            )
            .flag(
                "store_shipping_address_in_vault",
                self.store_shipping_address_in_vault,
            )
            .flag("hold_in_escrow", self.hold_in_escrow)
            .nested("paypal", self.paypal.as_ref())
            .flag(
                "skip_advanced_fraud_checking",
                self.skip_advanced_fraud_checking,
            )
            .nested("three_d_secure", self.three_d_secure.as_ref())
            .build()
    }
}

/// PayPal-specific transaction options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaypalOptions {
    pub custom_field: Option<String>,
    pub payee_email: Option<String>,
    pub description: Option<String>,
    /// Emitted in key order.
    pub supplementary_data: BTreeMap<String, String>,
}

impl ToForm for PaypalOptions {
    fn to_form(&self) -> FormValue {
        FormBuilder::new()
            .text("custom_field", self.custom_field.as_deref())
            .text("payee_email", self.payee_email.as_deref())
            .text("description", self.description.as_deref())
            .map("supplementary_data", &self.supplementary_data)
            .build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreeDSecureOptions {
    pub required: bool,
}

impl ToForm for ThreeDSecureOptions {
    fn to_form(&self) -> FormValue {
        FormBuilder::new().flag("required", self.required).build()
    }
}

/// Browser details for fraud screening.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDataRequest {
    pub customer_browser: Option<String>,
    pub customer_ip: Option<String>,
}

impl ToForm for RiskDataRequest {
    fn to_form(&self) -> FormValue {
        FormBuilder::new()
            .text("customer_browser", self.customer_browser.as_deref())
            .text("customer_ip", self.customer_ip.as_deref())
            .build()
    }
}

/// Statement descriptor shown on the cardholder's bill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicDescriptor {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub url: Option<String>,
}

impl ToForm for DynamicDescriptor {
    fn to_form(&self) -> FormValue {
        FormBuilder::new()
            .text("name", self.name.as_deref())
            .text("phone", self.phone.as_deref())
            .text("url", self.url.as_deref())
            .build()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemKind {
    Debit,
    Credit,
}

impl fmt::Display for LineItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineItemKind::Debit => "debit",
            LineItemKind::Credit => "credit",
        })
    }
}

/// Level 3 line item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItemRequest {
    pub name: Option<String>,
    pub kind: Option<LineItemKind>,
    pub quantity: Option<Decimal>,
    pub unit_amount: Option<Decimal>,
    pub total_amount: Option<Decimal>,
    pub product_code: Option<String>,
    pub description: Option<String>,
}

impl ToForm for LineItemRequest {
    fn to_form(&self) -> FormValue {
        FormBuilder::new()
            .text("name", self.name.as_deref())
            .value("kind", self.kind)
            .value("quantity", self.quantity)
            .value("unit_amount", self.unit_amount)
            .value("total_amount", self.total_amount)
            .text("product_code", self.product_code.as_deref())
            .text("description", self.description.as_deref())
            .build()
    }
}
