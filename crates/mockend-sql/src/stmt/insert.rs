use super::{Statement, Table, Value};

#[derive(Debug, Clone)]
pub struct Insert {
    pub table: String,

    pub columns: Vec<String>,

    /// One value per column
    pub values: Vec<Value>,

    pub returning: Option<Vec<String>>,
}

impl Statement {
    pub fn insert(table: &Table, assignments: Vec<(String, Value)>) -> Self {
        let (columns, values) = assignments.into_iter().unzip();

        Insert {
            table: table.name.clone(),
            columns,
            values,
            returning: None,
        }
        .into()
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
