//! Transaction domain module.
//!
//! Request objects encoded into transparent redirect descriptors, and the
//! transaction the gateway returns.
//!
//! # Module Structure
//!
//! - `request` - TransactionRequest and its option groups
//! - `customer` - CustomerRequest and CreditCard
//! - `address` - Billing/shipping Address
//! - `transaction` - Transaction response model and status

mod address;
mod customer;
mod request;
mod transaction;

pub use address::Address;
pub use customer::{CreditCard, CustomerRequest};
pub use request::{
    DynamicDescriptor, LineItemKind, LineItemRequest, PaypalOptions, RiskDataRequest,
    ThreeDSecureOptions, TransactionOptions, TransactionRequest, TransactionSource,
    TransactionType,
};
pub use transaction::{PaymentInstrumentType, Transaction, TransactionStatus};
