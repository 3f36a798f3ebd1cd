use crate::{BsonType, DocumentSchema};

use chrono::{TimeZone, Utc};
use mockend_core::{
    stmt::{Row, Value},
    Error, Result,
};
use mongodb::bson::{self, oid::ObjectId, Bson, Document};

/// Key field of every document
pub const ID: &str = "_id";

/// Converts a value to BSON, stored as `ty`.
pub fn to_bson(value: &Value, ty: BsonType) -> Result<Bson> {
    Ok(match (value, ty) {
        (Value::Null, _) => Bson::Null,
        (Value::Bool(v), BsonType::Boolean) => Bson::Boolean(*v),
        (Value::I64(v), BsonType::Double) => Bson::Double(*v as f64),
        (Value::F64(v), BsonType::Double) => Bson::Double(*v),
        (Value::String(v), BsonType::String) => Bson::String(v.clone()),
        (Value::DateTime(v), BsonType::DateTime) => {
            Bson::DateTime(bson::DateTime::from_millis(v.timestamp_millis()))
        }
        (value, ty) => {
            return Err(Error::type_conversion(value.clone(), ty.name()));
        }
    })
}

pub fn from_bson(bson: &Bson) -> Value {
    match bson {
        Bson::Null | Bson::Undefined => Value::Null,
        Bson::Boolean(v) => Value::Bool(*v),
        Bson::Double(v) => Value::F64(*v),
        Bson::Int32(v) => Value::I64(i64::from(*v)),
        Bson::Int64(v) => Value::I64(*v),
        Bson::String(v) => Value::String(v.clone()),
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(v) => match Utc.timestamp_millis_opt(v.timestamp_millis()).single() {
            Some(ts) => Value::DateTime(ts),
            None => Value::Null,
        },
        // Anything else was not written by this driver; keep it readable.
        other => Value::String(other.to_string()),
    }
}

/// Parses a path id into an ObjectId, `None` when it is not one.
pub fn parse_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

/// Builds the document for a row, keeping only declared fields.
pub fn row_to_document(row: &Row, schema: &DocumentSchema) -> Result<Document> {
    let mut doc = Document::new();

    for (name, value) in row.iter() {
        let Some(ty) = schema.get(name) else {
            continue;
        };

        doc.insert(name, to_bson(value, ty)?);
    }

    Ok(doc)
}

/// Reads a stored document back: declared fields in declaration order, then
/// the key. Fields absent from the document are left out.
pub fn document_to_row(doc: &Document, schema: &DocumentSchema) -> Row {
    let mut row = Row::new();

    for name in schema.fields.keys() {
        if let Some(value) = doc.get(name) {
            row.insert(name.as_str(), from_bson(value));
        }
    }

    if let Some(id) = doc.get(ID) {
        row.insert(ID, from_bson(id));
    }

    row
}
