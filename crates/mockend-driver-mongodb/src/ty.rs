//! Document-store type mapping.

use mockend_core::schema::{FieldSchema, FieldType};

use indexmap::IndexMap;

/// BSON type a declared field is stored as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BsonType {
    String,
    Double,
    Boolean,
    DateTime,
}

impl BsonType {
    pub fn from_field(ty: FieldType) -> BsonType {
        match ty {
            FieldType::String => BsonType::String,
            FieldType::Number => BsonType::Double,
            FieldType::Boolean => BsonType::Boolean,
            FieldType::Date => BsonType::DateTime,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BsonType::String => "String",
            BsonType::Double => "Double",
            BsonType::Boolean => "Boolean",
            BsonType::DateTime => "DateTime",
        }
    }
}

/// Field name to BSON type, with the same keys as the source schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentSchema {
    pub fields: IndexMap<String, BsonType>,
}

impl DocumentSchema {
    pub fn get(&self, name: &str) -> Option<BsonType> {
        self.fields.get(name).copied()
    }
}

pub fn map_schema(schema: &FieldSchema) -> DocumentSchema {
    DocumentSchema {
        fields: schema
            .iter()
            .map(|(name, ty)| (name.to_string(), BsonType::from_field(ty)))
            .collect(),
    }
}
