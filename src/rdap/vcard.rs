//! jCard contact decoding.
//!
//! RDAP embeds vCard contact data as `["vcard", [[name, params, type,
//! value], ...]]` (RFC 7483). The property tuples are registry-controlled
//! and frequently malformed, so every access here is defensive: a tuple
//! that is too short, has a non-string name, or carries a value that is not
//! a renderable scalar contributes nothing.

use std::str::FromStr;

use serde_json::Value;
use strum_macros::{EnumIter as EnumIterMacro, EnumString};

/// Contact property names recognized by the renderer.
///
/// Any other property name in a jCard is silently skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIterMacro)]
pub(crate) enum ContactProperty {
    /// Formatted full name ("fn")
    #[strum(serialize = "fn")]
    FullName,
    /// Organization name ("org")
    #[strum(serialize = "org")]
    Organization,
    /// Postal address ("adr")
    #[strum(serialize = "adr")]
    Address,
    /// Telephone number ("tel")
    #[strum(serialize = "tel")]
    Phone,
    /// Email address ("email")
    #[strum(serialize = "email")]
    Email,
    /// Web address ("url")
    #[strum(serialize = "url")]
    Url,
}

impl ContactProperty {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            ContactProperty::FullName => "Name",
            ContactProperty::Organization => "Organization",
            ContactProperty::Address => "Address",
            ContactProperty::Phone => "Phone",
            ContactProperty::Email => "Email",
            ContactProperty::Url => "URL",
        }
    }
}

/// Decodes the property tuples of a `vcardArray` into `Label: value`
/// fragments, keeping only properties in `allowed`.
///
/// The fragments carry no indentation; the caller places them.
pub(crate) fn contact_lines(vcard: &Value, allowed: &[ContactProperty]) -> Vec<String> {
    let Some(properties) = vcard.as_array().and_then(|a| a.get(1)).and_then(Value::as_array)
    else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    for tuple in properties {
        let Some(tuple) = tuple.as_array() else {
            continue;
        };
        let Some(name) = tuple.first().and_then(Value::as_str) else {
            continue;
        };
        let Ok(property) = ContactProperty::from_str(name) else {
            continue;
        };
        if !allowed.contains(&property) {
            continue;
        }
        if let Some(line) = render_property(property, tuple.get(1), tuple.get(3)) {
            lines.push(line);
        }
    }
    lines
}

/// Renders one recognized property tuple, or nothing if its value is not
/// usable.
fn render_property(
    property: ContactProperty,
    params: Option<&Value>,
    value: Option<&Value>,
) -> Option<String> {
    match property {
        ContactProperty::Address => {
            // The adr value is usually a component list; scalar values occur too
            let joined = match value? {
                Value::Array(components) => components
                    .iter()
                    .filter_map(scalar_text)
                    .collect::<Vec<_>>()
                    .join(", "),
                other => scalar_text(other)?,
            };
            let country = params
                .and_then(|p| p.get("cc"))
                .and_then(Value::as_str)
                .map(|cc| format!(" ({cc})"))
                .unwrap_or_default();
            Some(format!("Address: {joined}{country}"))
        }
        ContactProperty::Phone => {
            let number = scalar_text(value?)?;
            let number = number
                .strip_prefix("tel:")
                .map(str::to_string)
                .unwrap_or(number);
            match params.and_then(|p| p.get("type")).and_then(param_text) {
                Some(kind) => Some(format!("Phone ({kind}): {number}")),
                None => Some(format!("Phone: {number}")),
            }
        }
        _ => Some(format!("{}: {}", property.label(), scalar_text(value?)?)),
    }
}

/// Renders a scalar JSON value as bare text; arrays and objects are not
/// scalars.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Renders a jCard parameter value, which may be a scalar or a list.
fn param_text(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(scalar_text).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        other => scalar_text(other),
    }
}
