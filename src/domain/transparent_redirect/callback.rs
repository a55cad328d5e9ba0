//! Callback query strings returned by the gateway.
//!
//! Format: `key1=val1&key2=val2&...&hash=<signature>`
//!
//! The signature covers everything before the separator that precedes
//! `hash=`; the separator itself is not signed.

use super::errors::RedirectError;
use super::kind::RedirectKind;

const HASH_PARAM: &str = "hash=";

/// Splits a callback query into signed content and claimed signature.
///
/// Returns `None` when no parameter is named `hash`. A leading `?` is
/// ignored so a raw URL query can be passed as-is.
pub(crate) fn split_hash(query: &str) -> Option<(&str, &str)> {
    let query = query.strip_prefix('?').unwrap_or(query);

    if let Some(signature) = query.strip_prefix(HASH_PARAM) {
        return Some(("", signature));
    }

    query
        .match_indices(HASH_PARAM)
        .find(|(pos, _)| matches!(query.as_bytes()[pos - 1], b'&' | b'?'))
        .map(|(pos, _)| (&query[..pos - 1], &query[pos + HASH_PARAM.len()..]))
}

/// Decoded parameters of a verified callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackQuery {
    params: Vec<(String, String)>,
}

impl CallbackQuery {
    /// Decodes the signed content of a callback.
    ///
    /// `+` is read as a space. A parameter without `=` has an empty value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQueryEncoding` if a key or value is not valid
    /// percent-encoded UTF-8.
    pub(crate) fn from_content(content: &str) -> Result<Self, RedirectError> {
        let params = content
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let (key, value) = part.split_once('=').unwrap_or((part, ""));
                Ok((decode_component(key)?, decode_component(value)?))
            })
            .collect::<Result<Vec<_>, RedirectError>>()?;

        Ok(Self { params })
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All parameters in the order the gateway sent them.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Gateway HTTP status of the redirected operation.
    pub fn http_status(&self) -> Option<u16> {
        self.get("http_status")?.parse().ok()
    }

    /// ID of the transparent redirect request, used to confirm it.
    pub fn id(&self) -> Option<&str> {
        self.get("id")
    }

    /// Kind of operation the redirect performed.
    pub fn kind(&self) -> Option<RedirectKind> {
        self.get("kind")?.parse().ok()
    }

    /// True when the gateway reported a 2xx status.
    pub fn is_success(&self) -> bool {
        self.http_status()
            .map(|status| (200..300).contains(&status))
            .unwrap_or(false)
    }
}

fn decode_component(raw: &str) -> Result<String, RedirectError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| RedirectError::InvalidQueryEncoding(e.to_string()))
}
