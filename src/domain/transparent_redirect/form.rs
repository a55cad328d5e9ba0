//! Form payload model and flattening.
//!
//! Request structs describe themselves as a [`FormValue`] tree through a
//! hand-written [`ToForm`] implementation, which is where each field's wire
//! name lives. The tree is then flattened into ordered bracket-notation pairs
//! (`transaction[options][store_in_vault]`) and percent-encoded.
//!
//! # Omission Rules
//!
//! - Empty scalars and empty map values are omitted
//! - False flags are omitted; true flags encode as `1`
//! - Groups, maps and lists with nothing to emit produce no keys at all

use std::collections::BTreeMap;
use std::fmt::Display;

use super::errors::RedirectError;

/// Node of a form payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    /// Text value, omitted when empty.
    Scalar(String),

    /// Omit-if-false boolean, `1` when set.
    Flag(bool),

    /// Nested object: wire name and value per field, in declaration order.
    Group(Vec<(&'static str, FormValue)>),

    /// Free-form string map keyed by caller-supplied names.
    Map(BTreeMap<String, String>),

    /// Indexed collection (`parent[0][field]`).
    List(Vec<FormValue>),
}

impl FormValue {
    /// Whether flattening this value would emit no pairs.
    pub fn is_empty(&self) -> bool {
        match self {
            FormValue::Scalar(s) => s.is_empty(),
            FormValue::Flag(set) => !set,
            FormValue::Group(fields) => fields.iter().all(|(_, v)| v.is_empty()),
            FormValue::Map(entries) => entries.values().all(String::is_empty),
            FormValue::List(items) => items.iter().all(FormValue::is_empty),
        }
    }
}

/// Conversion of a request struct into its form payload.
pub trait ToForm {
    fn to_form(&self) -> FormValue;
}

impl ToForm for FormValue {
    fn to_form(&self) -> FormValue {
        self.clone()
    }
}

/// Builder for a [`FormValue::Group`].
///
/// Every method takes the field's wire name, so a `ToForm` implementation
/// reads as the wire table of its struct.
#[derive(Debug, Default)]
pub struct FormBuilder {
    fields: Vec<(&'static str, FormValue)>,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Optional text field.
    pub fn text(mut self, name: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.fields.push((name, FormValue::Scalar(value.to_string())));
        }
        self
    }

    /// Optional field rendered with `Display` (amounts, enums, counts).
    pub fn value<T: Display>(mut self, name: &'static str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.fields.push((name, FormValue::Scalar(value.to_string())));
        }
        self
    }

    /// Omit-if-false flag.
    pub fn flag(mut self, name: &'static str, set: bool) -> Self {
        self.fields.push((name, FormValue::Flag(set)));
        self
    }

    /// Optional nested object.
    pub fn nested<T: ToForm>(mut self, name: &'static str, value: Option<&T>) -> Self {
        if let Some(value) = value {
            self.fields.push((name, value.to_form()));
        }
        self
    }

    /// String map.
    pub fn map(mut self, name: &'static str, entries: &BTreeMap<String, String>) -> Self {
        self.fields.push((name, FormValue::Map(entries.clone())));
        self
    }

    /// Indexed list of nested objects.
    pub fn list<T: ToForm>(mut self, name: &'static str, items: &[T]) -> Self {
        self.fields.push((
            name,
            FormValue::List(items.iter().map(ToForm::to_form).collect()),
        ));
        self
    }

    pub fn build(self) -> FormValue {
        FormValue::Group(self.fields)
    }
}

/// Flattens a payload into ordered `(key, value)` pairs.
///
/// Fields of a top-level group become bare keys; everything below them is
/// bracket-suffixed. A scalar or flag at the top level has no name and is
/// rejected.
///
/// # Errors
///
/// Returns `RedirectError::InvalidFormKey` for an empty key or one containing
/// a bracket. No pairs are returned on error.
pub fn flatten(payload: &FormValue) -> Result<Vec<(String, String)>, RedirectError> {
    let mut pairs = Vec::new();
    match payload {
        FormValue::Group(fields) => {
            for (name, value) in fields {
                push_pairs(checked_key(name)?.to_string(), value, &mut pairs)?;
            }
        }
        FormValue::Map(entries) => {
            for (name, value) in entries.iter().filter(|(_, v)| !v.is_empty()) {
                pairs.push((checked_key(name)?.to_string(), value.clone()));
            }
        }
        other if other.is_empty() => {}
        _ => return Err(RedirectError::InvalidFormKey(String::new())),
    }
    Ok(pairs)
}

fn push_pairs(
    key: String,
    value: &FormValue,
    out: &mut Vec<(String, String)>,
) -> Result<(), RedirectError> {
    if value.is_empty() {
        return Ok(());
    }

    match value {
        FormValue::Scalar(s) => out.push((key, s.clone())),
        FormValue::Flag(_) => out.push((key, "1".to_string())),
        FormValue::Group(fields) => {
            for (name, child) in fields {
                push_pairs(format!("{}[{}]", key, checked_key(name)?), child, out)?;
            }
        }
        FormValue::Map(entries) => {
            for (name, v) in entries.iter().filter(|(_, v)| !v.is_empty()) {
                out.push((format!("{}[{}]", key, checked_key(name)?), v.clone()));
            }
        }
        FormValue::List(items) => {
            for (index, item) in items.iter().enumerate() {
                push_pairs(format!("{}[{}]", key, index), item, out)?;
            }
        }
    }
    Ok(())
}

fn checked_key(name: &str) -> Result<&str, RedirectError> {
    // Brackets would read back as nesting
    if name.is_empty() || name.contains(['[', ']']) {
        return Err(RedirectError::InvalidFormKey(name.to_string()));
    }
    Ok(name)
}

/// Joins pairs into a query string, percent-encoding keys and values.
///
/// Spaces become `%20`, never `+`.
pub fn encode_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
