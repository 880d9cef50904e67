//! Line-item properties attached to draft orders and cart lines.
//!
//! Storefront forms post properties as a JSON object whose values may be any
//! JSON type. The Admin API and the cart only accept text, so every value is
//! coerced to a string on the way in. Key order is preserved.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Property key holding the sector chosen in the pricing form.
pub const SECTOR_KEY: &str = "Secteur";

/// Property key holding the computed total to pay.
pub const TOTAL_KEY: &str = "_Total à payer";

/// Ordered text key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties(Vec<Property>);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Property {
    key: String,
    text: String,
    /// Raw value was `null`, `false`, `0` or `""`.
    blank: bool,
}

impl Properties {
    /// Build properties from a JSON object, coercing each value to text.
    #[must_use]
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self(
            object
                .iter()
                .map(|(key, value)| Property {
                    key: key.clone(),
                    text: value_to_text(value),
                    blank: is_blank(value),
                })
                .collect(),
        )
    }

    /// Look up a property value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.text.as_str())
    }

    /// Look up a property value, treating blank values as missing.
    ///
    /// Forms post unset fields as `null` or `""`; those never make it into
    /// generated titles.
    #[must_use]
    pub fn get_non_blank(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|p| p.key == key && !p.blank)
            .map(|p| p.text.as_str())
    }

    /// Iterate over key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|p| (p.key.as_str(), p.text.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for property in &self.0 {
            map.serialize_entry(&property.key, &property.text)?;
        }
        map.end()
    }
}

/// Render a JSON value as the text a property carries.
///
/// Strings are taken verbatim; everything else uses its compact JSON form,
/// so `null` becomes `"null"` and `true` becomes `"true"`.
#[must_use]
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() < f64::EPSILON),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
