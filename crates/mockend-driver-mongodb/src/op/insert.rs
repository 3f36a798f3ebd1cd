use crate::{value, DocumentSchema};

use mockend_core::{
    driver::{operation::Insert, Response},
    Error, Result,
};
use mongodb::{bson::Document, Collection};

pub(super) async fn execute(
    collection: &Collection<Document>,
    schema: &DocumentSchema,
    op: Insert,
) -> Result<Response> {
    let mut doc = value::row_to_document(&op.row, schema)?;

    let result = collection.insert_one(&doc).await.map_err(Error::driver)?;
    doc.insert(value::ID, result.inserted_id);

    Ok(Response::values([value::document_to_row(&doc, schema)]))
}
