use super::Type;

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub ty: Type,
    pub not_null: bool,
    pub auto_increment: bool,
}

impl ColumnDef {
    /// A nullable column
    pub fn new(name: impl Into<String>, ty: Type) -> ColumnDef {
        ColumnDef {
            name: name.into(),
            ty,
            not_null: false,
            auto_increment: false,
        }
    }

    /// The generated integer key column
    pub fn primary_key(name: impl Into<String>) -> ColumnDef {
        ColumnDef {
            name: name.into(),
            ty: Type::Integer,
            not_null: true,
            auto_increment: true,
        }
    }
}
