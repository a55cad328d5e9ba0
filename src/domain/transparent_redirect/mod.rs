//! Transparent redirect domain module.
//!
//! A transparent redirect lets the customer's browser post payment details
//! straight to the gateway. The merchant server contributes a signed
//! descriptor saying what to do; the gateway sends the browser back with a
//! signed callback query.
//!
//! # Module Structure
//!
//! - `form` - FormValue payload model, flattening and percent-encoding
//! - `kind` - RedirectKind operation tags
//! - `descriptor` - RequestDescriptor and SignedPayload
//! - `callback` - Callback hash splitting and CallbackQuery
//! - `codec` - RedirectCodec tying the above to a PayloadSigner
//! - `data` - Redirect payloads for transactions and customers

mod callback;
mod codec;
mod data;
mod descriptor;
mod errors;
mod form;
mod kind;

pub use callback::CallbackQuery;
pub use codec::RedirectCodec;
pub use data::{CustomerRedirectData, TransactionRedirectData};
pub(crate) use data::update_customer_form;
pub use descriptor::{RequestDescriptor, SignedPayload};
pub use errors::RedirectError;
pub use form::{encode_pairs, flatten, FormBuilder, FormValue, ToForm};
pub use kind::RedirectKind;
