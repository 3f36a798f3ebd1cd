use crate::value;

use mockend_core::{
    driver::{operation::DeleteById, Response},
    Error, Result,
};
use mongodb::{
    bson::{doc, Document},
    Collection,
};

pub(super) async fn execute(collection: &Collection<Document>, op: DeleteById) -> Result<Response> {
    let Some(id) = value::parse_id(&op.id) else {
        return Ok(Response::count(0));
    };

    let result = collection
        .delete_one(doc! { "_id": id })
        .await
        .map_err(Error::driver)?;

    Ok(Response::count(result.deleted_count))
}
