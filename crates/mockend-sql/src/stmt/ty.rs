use mockend_core::{schema::FieldType, stmt::Value, Error, Result};

/// Column storage type.
///
/// Rendering is flavor specific; see the serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// 32-bit integer, used for the generated key column
    Integer,

    /// 64-bit integer
    BigInt,

    Boolean,

    /// Variable length string with a maximum length
    VarChar(u64),

    /// Point in time, stored as UTC
    Timestamp,
}

impl Type {
    /// Maximum length of string columns.
    pub const STRING_LENGTH: u64 = 255;

    /// Maps an abstract field type onto its column type.
    pub fn from_field(ty: FieldType) -> Type {
        match ty {
            FieldType::String => Type::VarChar(Type::STRING_LENGTH),
            FieldType::Number => Type::BigInt,
            FieldType::Boolean => Type::Boolean,
            FieldType::Date => Type::Timestamp,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Type::Integer | Type::BigInt)
    }

    /// Prepares `value` for storage in a column of this type.
    ///
    /// Integer columns only accept integral numbers; a float with a
    /// fractional part is rejected rather than silently truncated.
    pub fn coerce(self, column: &str, value: Value) -> Result<Value> {
        match value {
            Value::F64(v) if self.is_integer() => match value.as_integral() {
                Some(v) => Ok(Value::I64(v)),
                None => Err(Error::validation(
                    column,
                    format!("{v} is not an integer"),
                )),
            },
            value => Ok(value),
        }
    }
}
