use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A value as it crosses the host boundary, in either direction.
///
/// The host is untyped, so nothing here is validated on construction;
/// each native decides which shape it reads (see [`crate::marshal`]).
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Undefined,
    Bool(bool),
    Number(f64),
    Text(String),
    Array(Vec<HostValue>),
    /// Named fields, in insertion order.
    Object(Vec<(String, HostValue)>),
    /// Anything the bridge has no representation for; carries the host's
    /// name for its type (e.g. `"function"`, `"bigint"`).
    Opaque(String),
}

impl HostValue {
    // --- Constructors ---

    pub fn text(s: impl Into<String>) -> Self {
        HostValue::Text(s.into())
    }

    pub fn numbers(values: &[f64]) -> Self {
        HostValue::Array(values.iter().copied().map(HostValue::Number).collect())
    }

    pub fn object<K: Into<String>>(fields: impl IntoIterator<Item = (K, HostValue)>) -> Self {
        HostValue::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    // --- Accessors ---

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            HostValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[HostValue]> {
        match self {
            HostValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Field lookup on an `Object`; `None` for any other variant.
    pub fn get(&self, key: &str) -> Option<&HostValue> {
        match self {
            HostValue::Object(fields) => fields.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Host-facing type name, used in mismatch messages.
    pub fn kind(&self) -> &str {
        match self {
            HostValue::Undefined => "undefined",
            HostValue::Bool(_) => "boolean",
            HostValue::Number(_) => "number",
            HostValue::Text(_) => "string",
            HostValue::Array(_) => "array",
            HostValue::Object(_) => "object",
            HostValue::Opaque(kind) => kind,
        }
    }
}

// Object fields keep their source order only because the workspace enables
// `serde_json/preserve_order`.
impl From<serde_json::Value> for HostValue {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match json {
            Json::Null => HostValue::Undefined,
            Json::Bool(b) => HostValue::Bool(b),
            // Without `arbitrary_precision` every JSON number has an f64 form.
            Json::Number(n) => n.as_f64().map_or(HostValue::Undefined, HostValue::Number),
            Json::String(s) => HostValue::Text(s),
            Json::Array(items) => HostValue::Array(items.into_iter().map(HostValue::from).collect()),
            Json::Object(map) => {
                HostValue::Object(map.into_iter().map(|(k, v)| (k, HostValue::from(v))).collect())
            }
        }
    }
}

// Non-finite numbers and opaque values serialize as `null`, which is what
// a JSON host would see for them anyway.
impl Serialize for HostValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            HostValue::Undefined | HostValue::Opaque(_) => serializer.serialize_unit(),
            HostValue::Bool(b) => serializer.serialize_bool(*b),
            HostValue::Number(n) => {
                if !n.is_finite() {
                    serializer.serialize_unit()
                } else if n.fract() == 0.0 && n.abs() < 9.007_199_254_740_992e15 {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            HostValue::Text(s) => serializer.serialize_str(s),
            HostValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            HostValue::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (k, v) in fields {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}
