//! Operation kinds a transparent redirect can trigger.

use std::fmt;
use std::str::FromStr;

use super::errors::RedirectError;

/// Server-side action the gateway performs when the redirect form is posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedirectKind {
    CreateTransaction,
    CreateCustomer,
    UpdateCustomer,
    CreatePaymentMethod,
    UpdatePaymentMethod,
}

impl RedirectKind {
    /// Wire value of the `kind` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            RedirectKind::CreateTransaction => "create_transaction",
            RedirectKind::CreateCustomer => "create_customer",
            RedirectKind::UpdateCustomer => "update_customer",
            RedirectKind::CreatePaymentMethod => "create_payment_method",
            RedirectKind::UpdatePaymentMethod => "update_payment_method",
        }
    }
}

impl fmt::Display for RedirectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RedirectKind {
    type Err = RedirectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create_transaction" => Ok(RedirectKind::CreateTransaction),
            "create_customer" => Ok(RedirectKind::CreateCustomer),
            "update_customer" => Ok(RedirectKind::UpdateCustomer),
            "create_payment_method" => Ok(RedirectKind::CreatePaymentMethod),
            "update_payment_method" => Ok(RedirectKind::UpdatePaymentMethod),
            other => Err(RedirectError::UnknownKind(other.to_string())),
        }
    }
}
