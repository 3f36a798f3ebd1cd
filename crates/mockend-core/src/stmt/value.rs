use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value as Json;

/// A backend-neutral value passed between the HTTP layer and drivers.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    String(String),
    DateTime(DateTime<Utc>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Name of the variant, used in conversion errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::I64(_) => "I64",
            Value::F64(_) => "F64",
            Value::String(_) => "String",
            Value::DateTime(_) => "DateTime",
        }
    }

    /// Returns the value as an integer if it is one, or if it is a float with
    /// no fractional part that fits in an `i64`.
    pub fn as_integral(&self) -> Option<i64> {
        match *self {
            Value::I64(v) => Some(v),
            Value::F64(v) if v.fract() == 0.0 && v >= i64::MIN as f64 && v <= i64::MAX as f64 => {
                Some(v as i64)
            }
            _ => None,
        }
    }

    /// Renders the value as JSON.
    ///
    /// Integral floats are rendered as JSON integers and timestamps as RFC
    /// 3339 strings with millisecond precision and a `Z` suffix.
    pub fn to_json(&self) -> Json {
        match self {
            Value::Null => Json::Null,
            Value::Bool(v) => Json::Bool(*v),
            Value::I64(v) => Json::from(*v),
            Value::F64(v) => match self.as_integral() {
                Some(v) => Json::from(v),
                None => serde_json::Number::from_f64(*v)
                    .map(Json::Number)
                    .unwrap_or(Json::Null),
            },
            Value::String(v) => Json::String(v.clone()),
            Value::DateTime(v) => Json::String(v.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::F64(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::DateTime(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}
