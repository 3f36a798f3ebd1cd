use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};
use mockend_core::{
    stmt::{self, Row},
    Error, Result,
};
use mockend_sql as sql;
use mysql_async::prelude::ToValue;

#[derive(Debug)]
pub struct Value(stmt::Value);

impl From<stmt::Value> for Value {
    fn from(value: stmt::Value) -> Self {
        Self(value)
    }
}

/// Years a `DATETIME` column can hold
const DATETIME_YEARS: std::ops::RangeInclusive<i32> = 1000..=9999;

impl Value {
    /// Converts to a protocol value for a column of type `ty`.
    ///
    /// Fails when the value does not fit the column, so nothing is silently
    /// truncated on the way to the server.
    pub(crate) fn to_mysql(&self, ty: Option<sql::Type>) -> Result<mysql_async::Value> {
        Ok(match &self.0 {
            stmt::Value::Null => mysql_async::Value::NULL,
            stmt::Value::Bool(value) => value.to_value(),
            stmt::Value::I64(value) => value.to_value(),
            stmt::Value::F64(value) => value.to_value(),
            stmt::Value::String(value) => value.to_value(),
            stmt::Value::DateTime(value) => datetime_to_mysql(value)
                .ok_or_else(|| Error::type_conversion(self.0.clone(), type_name(ty)))?,
        })
    }
}

// DATETIME has no zone; values are stored as UTC
fn datetime_to_mysql(value: &DateTime<Utc>) -> Option<mysql_async::Value> {
    if !DATETIME_YEARS.contains(&value.year()) {
        return None;
    }

    Some(mysql_async::Value::Date(
        u16::try_from(value.year()).ok()?,
        u8::try_from(value.month()).ok()?,
        u8::try_from(value.day()).ok()?,
        u8::try_from(value.hour()).ok()?,
        u8::try_from(value.minute()).ok()?,
        u8::try_from(value.second()).ok()?,
        value.timestamp_subsec_micros(),
    ))
}

fn type_name(ty: Option<sql::Type>) -> &'static str {
    match ty {
        Some(sql::Type::Integer) => "INTEGER",
        Some(sql::Type::BigInt) => "BIGINT",
        Some(sql::Type::Boolean) => "BOOLEAN",
        Some(sql::Type::VarChar(_)) => "VARCHAR",
        Some(sql::Type::Timestamp) | None => "DATETIME",
    }
}

/// Decodes a result row, using the table's column types to interpret the
/// protocol values.
pub(crate) fn decode_row(mut row: mysql_async::Row, table: &sql::Table) -> Result<Row> {
    let mut decoded = Row::new();

    for index in 0..row.len() {
        let name = row.columns_ref()[index].name_str().into_owned();
        let ty = table.column(&name).map(|column| column.ty);

        let value = row.take::<mysql_async::Value, usize>(index).ok_or_else(|| {
            Error::invalid_result(format!("missing value for column `{name}`"))
        })?;

        decoded.insert(name, from_sql(value, ty)?);
    }

    Ok(decoded)
}

fn from_sql(value: mysql_async::Value, ty: Option<sql::Type>) -> Result<stmt::Value> {
    use mysql_async::Value::*;

    Ok(match (value, ty) {
        (NULL, _) => stmt::Value::Null,
        // BOOLEAN is TINYINT(1)
        (Int(v), Some(sql::Type::Boolean)) => stmt::Value::Bool(v != 0),
        (UInt(v), Some(sql::Type::Boolean)) => stmt::Value::Bool(v != 0),
        (Int(v), _) => stmt::Value::I64(v),
        (UInt(v), _) => stmt::Value::I64(i64::try_from(v).map_err(|_| {
            Error::invalid_result(format!("unsigned value {v} is out of range"))
        })?),
        (Float(v), _) => stmt::Value::F64(f64::from(v)),
        (Double(v), _) => stmt::Value::F64(v),
        (Date(year, month, day, hour, minute, second, micros), _) => {
            stmt::Value::DateTime(date_to_utc(year, month, day, hour, minute, second, micros)?)
        }
        (Bytes(bytes), ty) => {
            let text = String::from_utf8(bytes)
                .map_err(|err| Error::invalid_result(format!("invalid UTF-8 in column: {err}")))?;

            from_text(text, ty)?
        }
        (Time(..), _) => {
            return Err(Error::invalid_result("TIME columns are not supported"));
        }
    })
}

/// Decodes a value sent in the text protocol.
fn from_text(text: String, ty: Option<sql::Type>) -> Result<stmt::Value> {
    let invalid = |text: &str, ty: sql::Type| {
        Error::invalid_result(format!("cannot decode `{text}` as {ty:?}"))
    };

    Ok(match ty {
        Some(sql::Type::Boolean) => match text.as_str() {
            "0" => stmt::Value::Bool(false),
            "1" => stmt::Value::Bool(true),
            _ => return Err(invalid(&text, sql::Type::Boolean)),
        },
        Some(ty @ (sql::Type::Integer | sql::Type::BigInt)) => stmt::Value::I64(
            text.parse()
                .map_err(|_| invalid(&text, ty))?,
        ),
        Some(sql::Type::Timestamp) => {
            let ts = NaiveDateTime::parse_from_str(&text, "%Y-%m-%d %H:%M:%S%.f")
                .map_err(|_| invalid(&text, sql::Type::Timestamp))?;
            stmt::Value::DateTime(ts.and_utc())
        }
        Some(sql::Type::VarChar(_)) | None => stmt::Value::String(text),
    })
}

fn date_to_utc(
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    micros: u32,
) -> Result<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year.into(), month.into(), day.into())
        .and_then(|date| {
            date.and_hms_micro_opt(hour.into(), minute.into(), second.into(), micros)
        })
        .map(|ts| ts.and_utc())
        .ok_or_else(|| {
            Error::invalid_result(format!(
                "invalid DATETIME {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn datetime_round_trips_through_protocol_value() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();
        let value = Value::from(stmt::Value::DateTime(ts))
            .to_mysql(Some(sql::Type::Timestamp))
            .unwrap();

        assert_eq!(
            from_sql(value, Some(sql::Type::Timestamp)).unwrap(),
            stmt::Value::DateTime(ts)
        );
    }

    #[test]
    fn datetime_outside_mysql_range_is_rejected() {
        for ts in [
            Utc.timestamp_millis_opt(2_200_000_000_000_000).unwrap(),
            Utc.with_ymd_and_hms(999, 12, 31, 23, 59, 59).unwrap(),
        ] {
            let err = Value::from(stmt::Value::DateTime(ts))
                .to_mysql(Some(sql::Type::Timestamp))
                .unwrap_err();

            assert!(err.is_type_conversion(), "err={err}");
            assert_eq!(err.to_string(), "cannot convert DateTime to DATETIME");
        }
    }

    #[test]
    fn datetime_at_range_edges_is_accepted() {
        let ts = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap();
        let value = Value::from(stmt::Value::DateTime(ts))
            .to_mysql(Some(sql::Type::Timestamp))
            .unwrap();

        assert_eq!(value, mysql_async::Value::Date(9999, 12, 31, 23, 59, 59, 0));
    }

    #[test]
    fn tinyint_decodes_as_bool_for_boolean_columns() {
        assert_eq!(
            from_sql(mysql_async::Value::Int(1), Some(sql::Type::Boolean)).unwrap(),
            stmt::Value::Bool(true)
        );
        assert_eq!(
            from_sql(mysql_async::Value::Int(1), Some(sql::Type::BigInt)).unwrap(),
            stmt::Value::I64(1)
        );
    }

    #[test]
    fn text_protocol_values() {
        assert_eq!(
            from_sql(
                mysql_async::Value::Bytes(b"2024-03-01 00:00:00".to_vec()),
                Some(sql::Type::Timestamp)
            )
            .unwrap(),
            stmt::Value::DateTime(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(
            from_sql(
                mysql_async::Value::Bytes(b"42".to_vec()),
                Some(sql::Type::BigInt)
            )
            .unwrap(),
            stmt::Value::I64(42)
        );
        assert_eq!(
            from_sql(
                mysql_async::Value::Bytes(b"Ada".to_vec()),
                Some(sql::Type::VarChar(255))
            )
            .unwrap(),
            stmt::Value::from("Ada")
        );
    }
}
