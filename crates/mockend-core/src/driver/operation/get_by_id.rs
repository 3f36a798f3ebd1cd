use super::Operation;

#[derive(Debug)]
pub struct GetById {
    /// Key as received in the request path. A key the backend cannot parse
    /// matches no record.
    pub id: String,
}

impl From<GetById> for Operation {
    fn from(value: GetById) -> Self {
        Self::GetById(value)
    }
}
