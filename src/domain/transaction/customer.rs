//! Customer and credit card request objects.

use serde::{Deserialize, Serialize};

use crate::domain::transparent_redirect::{FormBuilder, FormValue, ToForm};

/// Customer details for a transaction or a customer redirect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRequest {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub website: Option<String>,
}

impl ToForm for CustomerRequest {
    fn to_form(&self) -> FormValue {
        FormBuilder::new()
            .text("id", self.id.as_deref())
            .text("first_name", self.first_name.as_deref())
            .text("last_name", self.last_name.as_deref())
            .text("company", self.company.as_deref())
            .text("email", self.email.as_deref())
            .text("phone", self.phone.as_deref())
            .text("fax", self.fax.as_deref())
            .text("website", self.website.as_deref())
            .build()
    }
}

/// Card fields the server may pre-fill.
///
/// In a transparent redirect the number and CVV normally come straight from
/// the browser form; setting them here puts them in the signed descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCard {
    pub cardholder_name: Option<String>,
    pub number: Option<String>,
    /// `MM/YY` or `MM/YYYY`.
    pub expiration_date: Option<String>,
    pub expiration_month: Option<String>,
    pub expiration_year: Option<String>,
    pub cvv: Option<String>,
    /// Vault token of an existing card.
    pub token: Option<String>,
}

impl ToForm for CreditCard {
    fn to_form(&self) -> FormValue {
        FormBuilder::new()
            .text("cardholder_name", self.cardholder_name.as_deref())
            .text("number", self.number.as_deref())
            .text("expiration_date", self.expiration_date.as_deref())
            .text("expiration_month", self.expiration_month.as_deref())
            .text("expiration_year", self.expiration_year.as_deref())
            .text("cvv", self.cvv.as_deref())
            .text("token", self.token.as_deref())
            .build()
    }
}
