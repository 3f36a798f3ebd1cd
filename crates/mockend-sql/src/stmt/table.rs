use super::{ColumnDef, Row, Type, Value};

use mockend_core::{Model, Result};

/// The relational form of a [`Model`]: the key column followed by one column
/// per declared field.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Table name
    pub name: String,

    /// Name of the auto-increment key column
    pub primary_key: String,

    /// All columns, key column first
    pub columns: Vec<ColumnDef>,
}

impl Table {
    pub const PRIMARY_KEY: &'static str = "id";

    pub fn from_model(model: &Model) -> Table {
        let mut columns = vec![ColumnDef::primary_key(Table::PRIMARY_KEY)];

        columns.extend(
            model
                .fields
                .iter()
                .filter(|(name, _)| *name != Table::PRIMARY_KEY)
                .map(|(name, ty)| ColumnDef::new(name, Type::from_field(ty))),
        );

        Table {
            name: model.table_name(),
            primary_key: Table::PRIMARY_KEY.to_string(),
            columns,
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|column| column.name.as_str())
    }

    /// Turns a row of field values into column assignments.
    ///
    /// The key column and unknown columns are skipped; every value is coerced
    /// to its column type.
    pub fn assignments(&self, row: Row) -> Result<Vec<(String, Value)>> {
        let mut assignments = Vec::with_capacity(row.len());

        for (name, value) in row {
            if name == self.primary_key {
                continue;
            }

            let Some(column) = self.column(&name) else {
                continue;
            };

            let value = column.ty.coerce(&name, value)?;
            assignments.push((name, value));
        }

        Ok(assignments)
    }
}
