use super::Value;

/// `WHERE <column> = <value>`
#[derive(Debug, Clone)]
pub struct Filter {
    pub column: String,
    pub value: Value,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Filter {
        Filter {
            column: column.into(),
            value: value.into(),
        }
    }
}
