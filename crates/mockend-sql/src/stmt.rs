mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod filter;
pub use filter::Filter;

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod table;
pub use table::Table;

mod ty;
pub use ty::Type;

mod update;
pub use update::Update;

pub use mockend_core::stmt::{Row, Value};

#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    Delete(Delete),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// Requests every column of `table` back from an INSERT or UPDATE.
    ///
    /// Only PostgreSQL supports `RETURNING`; other statements are left as is.
    pub fn returning_all(self, table: &Table) -> Statement {
        let returning = Some(table.column_names().map(str::to_string).collect());

        match self {
            Statement::Insert(insert) => Insert { returning, ..insert }.into(),
            Statement::Update(update) => Update { returning, ..update }.into(),
            stmt => stmt,
        }
    }

    /// Returns true if the statement produces rows when executed.
    pub fn returns_rows(&self) -> bool {
        match self {
            Statement::Select(_) => true,
            Statement::Insert(insert) => insert.returning.is_some(),
            Statement::Update(update) => update.returning.is_some(),
            _ => false,
        }
    }
}
