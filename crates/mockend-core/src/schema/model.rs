use super::FieldSchema;
use crate::{stmt::Row, Error, Record, Result};

/// A named flat model: the unit a mock backend serves.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Name given by the caller, e.g. `teacher`
    pub name: String,

    /// Declared fields
    pub fields: FieldSchema,
}

impl Model {
    pub fn new(name: impl Into<String>, fields: FieldSchema) -> Result<Model> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(Error::invalid_body("model name must not be empty"));
        }

        Ok(Model { name, fields })
    }

    /// Name of the table (relational) or collection (document store) holding
    /// the model's records: the lowercased, pluralized model name.
    pub fn table_name(&self) -> String {
        pluralizer::pluralize(&self.name.to_lowercase(), 2, false)
    }

    /// Casts a JSON request body into a row of declared fields.
    ///
    /// Keys that are not declared fields are dropped. Values are cast to the
    /// declared type; a value that cannot be cast fails with
    /// [`Error::validation`].
    pub fn row_from_json(&self, body: &serde_json::Value) -> Result<Row> {
        let Some(object) = body.as_object() else {
            return Err(Error::invalid_body("expected a JSON object"));
        };

        self.row_from_record(object)
    }

    pub fn row_from_record(&self, record: &Record) -> Result<Row> {
        let mut row = Row::new();

        for (name, ty) in self.fields.iter() {
            if let Some(value) = record.get(name) {
                row.insert(name.to_string(), ty.cast(name, value)?);
            }
        }

        Ok(row)
    }
}
