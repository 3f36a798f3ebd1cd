mod delete_by_id;
mod find_all;
mod get_by_id;
mod insert;
mod update_by_id;

use crate::DocumentSchema;

use mockend_core::{
    driver::{operation::Operation, Response},
    Result,
};
use mongodb::{bson::Document, Collection};

pub(crate) async fn execute_operation(
    collection: &Collection<Document>,
    schema: &DocumentSchema,
    op: Operation,
) -> Result<Response> {
    tracing::debug!(
        operation = op.name(),
        collection = %collection.name(),
        "executing operation"
    );

    match op {
        Operation::Insert(op) => insert::execute(collection, schema, op).await,
        Operation::FindAll(op) => find_all::execute(collection, schema, op).await,
        Operation::GetById(op) => get_by_id::execute(collection, schema, op).await,
        Operation::UpdateById(op) => update_by_id::execute(collection, schema, op).await,
        Operation::DeleteById(op) => delete_by_id::execute(collection, op).await,
    }
}
