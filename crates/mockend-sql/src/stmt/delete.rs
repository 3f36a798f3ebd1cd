use super::{Filter, Statement, Table, Value};

#[derive(Debug, Clone)]
pub struct Delete {
    pub table: String,
    pub filter: Option<Filter>,
}

impl Statement {
    pub fn delete_by_id(table: &Table, id: impl Into<Value>) -> Self {
        Delete {
            table: table.name.clone(),
            filter: Some(Filter::eq(&table.primary_key, id)),
        }
        .into()
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
