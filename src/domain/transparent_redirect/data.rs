//! Payloads for the redirect kinds the gateway client exposes.

use crate::domain::transaction::{CustomerRequest, TransactionRequest};

use super::form::{FormBuilder, FormValue, ToForm};

/// Data for a `create_transaction` redirect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionRedirectData {
    pub redirect_url: String,
    pub transaction: TransactionRequest,
}

impl ToForm for TransactionRedirectData {
    fn to_form(&self) -> FormValue {
        FormBuilder::new()
            .nested("transaction", Some(&self.transaction))
            .build()
    }
}

/// Data for a `create_customer` or `update_customer` redirect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerRedirectData {
    pub redirect_url: String,
    pub customer: CustomerRequest,
}

impl ToForm for CustomerRedirectData {
    fn to_form(&self) -> FormValue {
        FormBuilder::new()
            .nested("customer", Some(&self.customer))
            .build()
    }
}

/// `update_customer` payload: the target customer plus the changes.
pub(crate) fn update_customer_form(customer_id: &str, data: &CustomerRedirectData) -> FormValue {
    FormBuilder::new()
        .text("customer_id", Some(customer_id))
        .nested("customer", Some(&data.customer))
        .build()
}
