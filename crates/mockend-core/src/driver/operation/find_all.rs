use super::Operation;

#[derive(Debug, Default)]
pub struct FindAll {}

impl From<FindAll> for Operation {
    fn from(value: FindAll) -> Self {
        Self::FindAll(value)
    }
}
