use crate::{stmt::Row, Error, Result};

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result, as a list of rows
    Values(Vec<Row>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn values(values: impl IntoIterator<Item = Row>) -> Self {
        Self {
            rows: Rows::Values(values.into_iter().collect()),
        }
    }

    pub fn empty_values() -> Self {
        Self {
            rows: Rows::Values(Vec::new()),
        }
    }

    /// Returns a response holding `row` when it is `Some`, no rows otherwise.
    pub fn optional(row: Option<Row>) -> Self {
        Self::values(row)
    }
}

impl Rows {
    pub fn into_count(self) -> Result<u64> {
        match self {
            Rows::Count(count) => Ok(count),
            Rows::Values(rows) => Err(Error::invalid_result(format!(
                "expected a row count, got {} row(s)",
                rows.len()
            ))),
        }
    }

    pub fn into_values(self) -> Result<Vec<Row>> {
        match self {
            Rows::Values(rows) => Ok(rows),
            Rows::Count(count) => Err(Error::invalid_result(format!(
                "expected rows, got a count of {count}"
            ))),
        }
    }

    /// Returns the only row, `None` when there is none.
    pub fn into_first(self) -> Result<Option<Row>> {
        let mut rows = self.into_values()?;

        match rows.len() {
            0 | 1 => Ok(rows.pop()),
            n => Err(Error::invalid_result(format!(
                "expected at most one row, got {n}"
            ))),
        }
    }
}
