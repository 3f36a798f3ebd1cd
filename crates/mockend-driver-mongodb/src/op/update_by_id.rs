use crate::{value, DocumentSchema};

use mockend_core::{
    driver::{operation::UpdateById, Response},
    Error, Result,
};
use mongodb::{
    bson::{doc, Document},
    options::ReturnDocument,
    Collection,
};

pub(super) async fn execute(
    collection: &Collection<Document>,
    schema: &DocumentSchema,
    op: UpdateById,
) -> Result<Response> {
    let Some(id) = value::parse_id(&op.id) else {
        return Ok(Response::empty_values());
    };

    let filter = doc! { "_id": id };
    let set = value::row_to_document(&op.assignments, schema)?;

    // An empty `$set` is rejected by older servers
    let doc = if set.is_empty() {
        collection.find_one(filter).await
    } else {
        collection
            .find_one_and_update(filter, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
    }
    .map_err(Error::driver)?;

    Ok(Response::optional(
        doc.map(|doc| value::document_to_row(&doc, schema)),
    ))
}
