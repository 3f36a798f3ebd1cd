//! The caller-facing model description: a name plus a flat map of field names
//! to abstract field types.

mod field_schema;
pub use field_schema::FieldSchema;

mod field_type;
pub use field_type::FieldType;

mod model;
pub use model::Model;
