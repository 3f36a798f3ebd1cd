use crate::{value, DocumentSchema};

use mockend_core::{
    driver::{operation::GetById, Response},
    Error, Result,
};
use mongodb::{
    bson::{doc, Document},
    Collection,
};

pub(super) async fn execute(
    collection: &Collection<Document>,
    schema: &DocumentSchema,
    op: GetById,
) -> Result<Response> {
    let Some(id) = value::parse_id(&op.id) else {
        return Ok(Response::empty_values());
    };

    let doc = collection
        .find_one(doc! { "_id": id })
        .await
        .map_err(Error::driver)?;

    Ok(Response::optional(
        doc.map(|doc| value::document_to_row(&doc, schema)),
    ))
}
