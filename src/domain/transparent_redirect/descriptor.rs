//! Request descriptors and their signed form.

use super::errors::RedirectError;
use super::form::{encode_pairs, flatten, FormValue};
use super::kind::RedirectKind;

/// What a transparent redirect should do and where the gateway sends the
/// browser afterwards.
///
/// Lives only for the duration of an encode call.
#[derive(Debug, Clone, Copy)]
pub struct RequestDescriptor<'a> {
    kind: RedirectKind,
    redirect_url: &'a str,
    payload: &'a FormValue,
}

impl<'a> RequestDescriptor<'a> {
    pub fn new(kind: RedirectKind, redirect_url: &'a str, payload: &'a FormValue) -> Self {
        Self {
            kind,
            redirect_url,
            payload,
        }
    }

    pub fn kind(&self) -> RedirectKind {
        self.kind
    }

    /// Ordered pairs: `kind`, `redirect_url`, then the flattened payload.
    ///
    /// # Errors
    ///
    /// - `InvalidRedirectUrl` - redirect URL is empty or blank
    /// - `InvalidFormKey` - payload contains an unencodable key
    pub fn to_pairs(&self) -> Result<Vec<(String, String)>, RedirectError> {
        if self.redirect_url.trim().is_empty() {
            return Err(RedirectError::InvalidRedirectUrl);
        }

        let mut pairs = vec![
            ("kind".to_string(), self.kind.as_str().to_string()),
            ("redirect_url".to_string(), self.redirect_url.to_string()),
        ];
        pairs.extend(flatten(self.payload)?);
        Ok(pairs)
    }

    /// The percent-encoded query string that gets signed.
    pub fn to_query_string(&self) -> Result<String, RedirectError> {
        Ok(encode_pairs(&self.to_pairs()?))
    }
}

/// Query string content together with its signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    pub content: String,
    pub signature: String,
}

impl SignedPayload {
    /// Separator between content and signature in an encoded descriptor.
    pub const SEPARATOR: char = '|';

    /// `content|signature`, the value submitted in the redirect form.
    pub fn encode(&self) -> String {
        format!("{}{}{}", self.content, Self::SEPARATOR, self.signature)
    }

    /// Splits an encoded descriptor.
    ///
    /// Content is percent-encoded and never contains a literal `|`, so
    /// anything other than exactly one separator is rejected.
    pub fn parse(descriptor: &str) -> Option<Self> {
        let (content, signature) = descriptor.split_once(Self::SEPARATOR)?;
        if signature.contains(Self::SEPARATOR) {
            return None;
        }
        Some(Self {
            content: content.to_string(),
            signature: signature.to_string(),
        })
    }
}
