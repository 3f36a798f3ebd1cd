use mockend_core::{
    schema::{FieldSchema, Model},
    stmt::{Row, Value},
};
use mockend_sql::{ColumnDef, Table, Type};
use pretty_assertions::assert_eq;

#[test]
fn from_model_adds_key_column() {
    let fields = FieldSchema::parse([("name", "string"), ("age", "number")]).unwrap();
    let table = Table::from_model(&Model::new("teacher", fields).unwrap());

    assert_eq!(table.name, "teachers");
    assert_eq!(table.primary_key, "id");
    assert_eq!(
        table.columns,
        vec![
            ColumnDef::primary_key("id"),
            ColumnDef::new("name", Type::VarChar(255)),
            ColumnDef::new("age", Type::BigInt),
        ]
    );
}

#[test]
fn field_types_map_onto_columns() {
    let fields = FieldSchema::parse([
        ("name", "string"),
        ("age", "number"),
        ("active", "boolean"),
        ("hired", "date"),
    ])
    .unwrap();
    let table = Table::from_model(&Model::new("teacher", fields).unwrap());

    let types = table
        .columns
        .iter()
        .skip(1)
        .map(|column| (column.name.as_str(), column.ty))
        .collect::<Vec<_>>();

    assert_eq!(
        types,
        vec![
            ("name", Type::VarChar(255)),
            ("age", Type::BigInt),
            ("active", Type::Boolean),
            ("hired", Type::Timestamp),
        ]
    );
}

#[test]
fn declared_id_field_does_not_shadow_key() {
    let fields = FieldSchema::parse([("id", "string"), ("name", "string")]).unwrap();
    let table = Table::from_model(&Model::new("teacher", fields).unwrap());

    assert_eq!(
        table.column_names().collect::<Vec<_>>(),
        vec!["id", "name"]
    );
    assert_eq!(table.column("id").unwrap().ty, Type::Integer);
}

#[test]
fn assignments_skip_key_and_coerce() {
    let fields = FieldSchema::parse([("name", "string"), ("age", "number")]).unwrap();
    let table = Table::from_model(&Model::new("teacher", fields).unwrap());

    let row: Row = [
        ("id", Value::I64(99)),
        ("name", Value::from("Ada")),
        ("age", Value::F64(41.0)),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        table.assignments(row).unwrap(),
        vec![
            ("name".to_string(), Value::from("Ada")),
            ("age".to_string(), Value::I64(41)),
        ]
    );
}

#[test]
fn fractional_number_is_rejected_for_integer_column() {
    let fields = FieldSchema::parse([("age", "number")]).unwrap();
    let table = Table::from_model(&Model::new("teacher", fields).unwrap());

    let row: Row = [("age", Value::F64(41.5))].into_iter().collect();
    let err = table.assignments(row).unwrap_err();

    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        "invalid value for field `age`: 41.5 is not an integer"
    );
}
