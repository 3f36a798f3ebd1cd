use super::Operation;

#[derive(Debug)]
pub struct DeleteById {
    /// Key as received in the request path
    pub id: String,
}

impl From<DeleteById> for Operation {
    fn from(value: DeleteById) -> Self {
        Self::DeleteById(value)
    }
}
