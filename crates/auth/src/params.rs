//! Parameter sets for signed requests.

use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::BTreeMap;

/// A single parameter value before stringification.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Sent as-is.
    Text(String),
    /// Sent as its decimal representation.
    Number(serde_json::Number),
    /// Sent as `true` / `false`.
    Bool(bool),
    /// Object or array, sent as compact JSON text.
    Json(Value),
}

impl ParamValue {
    /// Render the value exactly as it is signed and transmitted.
    pub fn to_param_string(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Json(v) => v.to_string(),
        }
    }

    /// Convert a JSON value. `null` has no parameter form and yields `None`.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(Self::Text(s)),
            Value::Number(n) => Some(Self::Number(n)),
            Value::Bool(b) => Some(Self::Bool(b)),
            other => Some(Self::Json(other)),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

/// Trailing zeros are dropped: `1000.00` is sent as `1000`.
impl From<Decimal> for ParamValue {
    fn from(value: Decimal) -> Self {
        Self::Text(value.normalize().to_string())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Number(value.into())
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u8, u32, u64);

/// Unordered mapping of parameter names to values.
///
/// Keys are kept in a `BTreeMap`, so iteration is always in ascending byte
/// order of the key, which is the order the canonical string requires.
/// Absent values (`None`, JSON `null`) are never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamSet {
    entries: BTreeMap<String, ParamValue>,
}

impl ParamSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.entries.insert(name.into(), value.into());
        self
    }

    /// Insert a value only when it is present.
    pub fn insert_opt<V: Into<ParamValue>>(
        &mut self,
        name: impl Into<String>,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(v) = value {
            self.insert(name, v);
        }
        self
    }

    /// Insert a JSON value; `null` is skipped.
    pub fn insert_json(&mut self, name: impl Into<String>, value: Value) -> &mut Self {
        if let Some(v) = ParamValue::from_json(value) {
            self.entries.insert(name.into(), v);
        }
        self
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a value by name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.get(name)
    }

    /// Remove a value by name.
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.entries.remove(name)
    }

    /// Check whether a parameter is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over parameters in canonical (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for ParamSet
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}
