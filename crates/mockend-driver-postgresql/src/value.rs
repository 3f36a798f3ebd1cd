use chrono::{DateTime, NaiveDateTime, Utc};
use mockend_core::{
    stmt::{self, Row},
    Error, Result,
};
use mockend_sql::TypedValue;
use tokio_postgres::types::{accepts, private::BytesMut, to_sql_checked, IsNull, ToSql, Type};

#[derive(Debug)]
pub struct Value(stmt::Value);

impl From<TypedValue> for Value {
    fn from(value: TypedValue) -> Self {
        Self(value.value)
    }
}

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> std::result::Result<IsNull, Box<dyn std::error::Error + Sync + Send>>
    where
        Self: Sized,
    {
        match &self.0 {
            stmt::Value::Null => Ok(IsNull::Yes),
            stmt::Value::Bool(value) => value.to_sql(ty, out),
            stmt::Value::I64(value) => match *ty {
                Type::INT4 => i32::try_from(*value)?.to_sql(ty, out),
                Type::INT8 => value.to_sql(ty, out),
                Type::FLOAT8 => (*value as f64).to_sql(ty, out),
                _ => value.to_string().to_sql(ty, out),
            },
            stmt::Value::F64(value) => match *ty {
                Type::FLOAT8 => value.to_sql(ty, out),
                Type::INT4 | Type::INT8 => match self.0.as_integral() {
                    Some(value) => Value(stmt::Value::I64(value)).to_sql(ty, out),
                    None => Err(format!("{value} is not an integer").into()),
                },
                _ => value.to_string().to_sql(ty, out),
            },
            stmt::Value::String(value) => value.to_sql(ty, out),
            stmt::Value::DateTime(value) => match *ty {
                Type::TIMESTAMP => value.naive_utc().to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
        }
    }

    accepts!(BOOL, INT4, INT8, FLOAT8, TEXT, VARCHAR, TIMESTAMP, TIMESTAMPTZ);
    to_sql_checked!();
}

/// Decodes a result row by the column types PostgreSQL reports.
pub(crate) fn decode_row(row: &tokio_postgres::Row) -> Result<Row> {
    let mut decoded = Row::new();

    for (index, column) in row.columns().iter().enumerate() {
        decoded.insert(column.name(), from_sql(row, index, column.type_())?);
    }

    Ok(decoded)
}

fn from_sql(row: &tokio_postgres::Row, index: usize, ty: &Type) -> Result<stmt::Value> {
    // NOTE: the inner representation of the PostgreSQL type enum is not
    // accessible, so each type is matched by comparison.
    let value: stmt::Value = if *ty == Type::TEXT || *ty == Type::VARCHAR {
        get::<String>(row, index)?.into()
    } else if *ty == Type::BOOL {
        get::<bool>(row, index)?.into()
    } else if *ty == Type::INT4 {
        get::<i32>(row, index)?.map(i64::from).into()
    } else if *ty == Type::INT8 {
        get::<i64>(row, index)?.into()
    } else if *ty == Type::FLOAT8 {
        get::<f64>(row, index)?.into()
    } else if *ty == Type::TIMESTAMPTZ {
        get::<DateTime<Utc>>(row, index)?.into()
    } else if *ty == Type::TIMESTAMP {
        get::<NaiveDateTime>(row, index)?
            .map(|ts| ts.and_utc())
            .into()
    } else {
        return Err(Error::invalid_result(format!(
            "unsupported column type `{ty}`"
        )));
    };

    Ok(value)
}

fn get<'a, T>(row: &'a tokio_postgres::Row, index: usize) -> Result<Option<T>>
where
    T: tokio_postgres::types::FromSql<'a>,
{
    row.try_get::<usize, Option<T>>(index).map_err(Error::driver)
}
