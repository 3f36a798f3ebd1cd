use super::Operation;
use crate::stmt::Row;

#[derive(Debug)]
pub struct UpdateById {
    /// Key as received in the request path
    pub id: String,

    /// Fields to assign. When empty the record is returned unchanged.
    pub assignments: Row,
}

impl From<UpdateById> for Operation {
    fn from(value: UpdateById) -> Self {
        Self::UpdateById(value)
    }
}
