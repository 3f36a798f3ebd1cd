use super::{Filter, Statement, Table, Value};

#[derive(Debug, Clone)]
pub struct Update {
    pub table: String,
    pub assignments: Vec<(String, Value)>,
    pub filter: Option<Filter>,
    pub returning: Option<Vec<String>>,
}

impl Statement {
    pub fn update_by_id(
        table: &Table,
        id: impl Into<Value>,
        assignments: Vec<(String, Value)>,
    ) -> Self {
        Update {
            table: table.name.clone(),
            assignments,
            filter: Some(Filter::eq(&table.primary_key, id)),
            returning: None,
        }
        .into()
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
