use super::Operation;
use crate::stmt::Row;

#[derive(Debug)]
pub struct Insert {
    /// Declared fields to store. Missing fields are left unset.
    pub row: Row,
}

impl From<Insert> for Operation {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
