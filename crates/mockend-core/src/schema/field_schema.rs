use super::FieldType;
use crate::{Error, Result};

use indexmap::IndexMap;

/// Field name to [`FieldType`] mapping for a single flat model.
///
/// Declaration order is kept so that generated tables and responses list
/// columns in a stable order; it carries no other meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSchema {
    fields: IndexMap<String, FieldType>,
}

impl FieldSchema {
    pub fn new() -> FieldSchema {
        FieldSchema::default()
    }

    /// Builds a schema from `(field, type name)` pairs.
    ///
    /// Every type name must belong to the vocabulary; the first unknown name
    /// fails the whole schema with [`Error::unknown_field_type`].
    pub fn parse<I, K, V>(entries: I) -> Result<FieldSchema>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut schema = FieldSchema::new();

        for (name, ty) in entries {
            let name = name.into();
            let ty = FieldType::parse(&name, ty.as_ref())?;
            schema.insert(name, ty)?;
        }

        Ok(schema)
    }

    /// Builds a schema from a JSON object of `field -> type name`.
    pub fn from_json(value: &serde_json::Value) -> Result<FieldSchema> {
        let Some(object) = value.as_object() else {
            return Err(Error::invalid_body(
                "a field schema must be a JSON object of field names to types",
            ));
        };

        let mut schema = FieldSchema::new();

        for (name, ty) in object {
            let Some(ty) = ty.as_str() else {
                return Err(Error::unknown_field_type(name, ty.to_string()));
            };
            schema.insert(name.clone(), FieldType::parse(name, ty)?)?;
        }

        Ok(schema)
    }

    /// Adds a field. Field names must be non-empty.
    pub fn insert(&mut self, name: impl Into<String>, ty: FieldType) -> Result<()> {
        let name = name.into();

        if name.is_empty() {
            return Err(Error::invalid_body("field names must not be empty"));
        }

        self.fields.insert(name, ty);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<FieldType> {
        self.fields.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldType)> + '_ {
        self.fields.iter().map(|(name, ty)| (name.as_str(), *ty))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a FieldSchema {
    type Item = (&'a String, &'a FieldType);
    type IntoIter = indexmap::map::Iter<'a, String, FieldType>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
