//! Billing and shipping addresses.

use serde::{Deserialize, Serialize};

use crate::domain::transparent_redirect::{FormBuilder, FormValue, ToForm};

/// Postal address sent with a transaction or customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub street_address: Option<String>,
    pub extended_address: Option<String>,
    /// City.
    pub locality: Option<String>,
    /// State or province.
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country_code_alpha2: Option<String>,
    pub country_code_alpha3: Option<String>,
    pub country_name: Option<String>,
}

impl ToForm for Address {
    fn to_form(&self) -> FormValue {
        FormBuilder::new()
            .text("first_name", self.first_name.as_deref())
            .text("last_name", self.last_name.as_deref())
            .text("company", self.company.as_deref())
            .text("street_address", self.street_address.as_deref())
            .text("extended_address", self.extended_address.as_deref())
            .text("locality", self.locality.as_deref())
            .text("region", self.region.as_deref())
            .text("postal_code", self.postal_code.as_deref())
            .text("country_code_alpha2", self.country_code_alpha2.as_deref())
            .text("country_code_alpha3", self.country_code_alpha3.as_deref())
            .text("country_name", self.country_name.as_deref())
            .build()
    }
}
