use crate::{stmt::Value, Error, Result};

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value as Json;
use std::{fmt, str::FromStr};

/// Abstract, backend-independent field type.
///
/// Callers describe a model with the vocabulary `"string"`, `"number"`,
/// `"boolean"` and `"date"`. Each driver maps these onto its native type
/// system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Date,
}

impl FieldType {
    pub const ALL: [FieldType; 4] = [
        FieldType::String,
        FieldType::Number,
        FieldType::Boolean,
        FieldType::Date,
    ];

    /// Returns the vocabulary name of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
        }
    }

    /// Parses a vocabulary name for `field`, failing with
    /// [`Error::unknown_field_type`] when it is not recognized.
    pub fn parse(field: &str, name: &str) -> Result<FieldType> {
        FieldType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == name)
            .ok_or_else(|| Error::unknown_field_type(field, name))
    }
}

impl FieldType {
    /// Casts a JSON value supplied for `field` into a [`Value`] of this type.
    ///
    /// `null` stays null for every type. Otherwise:
    ///
    /// * `string` accepts strings, numbers and booleans (stringified)
    /// * `number` accepts numbers and numeric strings
    /// * `boolean` accepts booleans, `"true"`/`"false"` and `0`/`1`
    /// * `date` accepts RFC 3339 timestamps, `YYYY-MM-DD` dates and epoch
    ///   milliseconds
    pub fn cast(self, field: &str, value: &Json) -> Result<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        let cast = match self {
            FieldType::String => cast_string(value),
            FieldType::Number => cast_number(value),
            FieldType::Boolean => cast_boolean(value),
            FieldType::Date => cast_date(value),
        };

        cast.ok_or_else(|| {
            Error::validation(field, format!("cannot cast {value} to {}", self.as_str()))
        })
    }
}

fn cast_string(value: &Json) -> Option<Value> {
    match value {
        Json::String(s) => Some(Value::String(s.clone())),
        Json::Number(n) => Some(Value::String(n.to_string())),
        Json::Bool(b) => Some(Value::String(b.to_string())),
        _ => None,
    }
}

fn cast_number(value: &Json) -> Option<Value> {
    match value {
        Json::Number(n) => match n.as_i64() {
            Some(n) => Some(Value::I64(n)),
            None => n.as_f64().map(Value::F64),
        },
        Json::String(s) => {
            let s = s.trim();
            if let Ok(n) = s.parse::<i64>() {
                Some(Value::I64(n))
            } else {
                s.parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .map(Value::F64)
            }
        }
        _ => None,
    }
}

fn cast_boolean(value: &Json) -> Option<Value> {
    match value {
        Json::Bool(b) => Some(Value::Bool(*b)),
        Json::String(s) => match s.as_str() {
            "true" => Some(Value::Bool(true)),
            "false" => Some(Value::Bool(false)),
            _ => None,
        },
        Json::Number(n) => match n.as_i64() {
            Some(1) => Some(Value::Bool(true)),
            Some(0) => Some(Value::Bool(false)),
            _ => None,
        },
        _ => None,
    }
}

fn cast_date(value: &Json) -> Option<Value> {
    match value {
        Json::String(s) => parse_date(s).map(Value::DateTime),
        Json::Number(n) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
            .map(Value::DateTime),
        _ => None,
    }
}

/// Parses the date formats accepted in request bodies.
fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }

    if let Ok(ts) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ts.and_utc());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|ts| ts.and_utc())
}

impl FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FieldType::parse("<unnamed>", s)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
