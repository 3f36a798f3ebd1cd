use super::{Filter, Statement, Table, Value};

#[derive(Debug, Clone)]
pub struct Select {
    pub table: String,
    pub columns: Vec<String>,
    pub filter: Option<Filter>,
    pub order_by: Option<String>,
}

impl Statement {
    /// Every row, in key order.
    pub fn select_all(table: &Table) -> Self {
        Select {
            table: table.name.clone(),
            columns: table.column_names().map(str::to_string).collect(),
            filter: None,
            order_by: Some(table.primary_key.clone()),
        }
        .into()
    }

    pub fn select_by_id(table: &Table, id: impl Into<Value>) -> Self {
        Select {
            table: table.name.clone(),
            columns: table.column_names().map(str::to_string).collect(),
            filter: Some(Filter::eq(&table.primary_key, id)),
            order_by: None,
        }
        .into()
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
