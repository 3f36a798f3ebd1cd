use crate::{value, DocumentSchema};

use futures::TryStreamExt;
use mockend_core::{
    driver::{operation::FindAll, Response},
    Error, Result,
};
use mongodb::{
    bson::{doc, Document},
    Collection,
};

pub(super) async fn execute(
    collection: &Collection<Document>,
    schema: &DocumentSchema,
    _op: FindAll,
) -> Result<Response> {
    let documents: Vec<Document> = collection
        .find(doc! {})
        .await
        .map_err(Error::driver)?
        .try_collect()
        .await
        .map_err(Error::driver)?;

    Ok(Response::values(
        documents
            .iter()
            .map(|doc| value::document_to_row(doc, schema)),
    ))
}
