mod delete_by_id;
pub use delete_by_id::DeleteById;

mod find_all;
pub use find_all::FindAll;

mod get_by_id;
pub use get_by_id::GetById;

mod insert;
pub use insert::Insert;

mod update_by_id;
pub use update_by_id::UpdateById;

#[derive(Debug)]
pub enum Operation {
    /// Create a new record
    Insert(Insert),

    /// Fetch every record of the model
    FindAll(FindAll),

    /// Get one record by its key
    GetById(GetById),

    /// Update a record by its key, returning the updated record
    UpdateById(UpdateById),

    /// Delete a record by its key
    DeleteById(DeleteById),
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Insert(_) => "insert",
            Operation::FindAll(_) => "find_all",
            Operation::GetById(_) => "get_by_id",
            Operation::UpdateById(_) => "update_by_id",
            Operation::DeleteById(_) => "delete_by_id",
        }
    }
}
