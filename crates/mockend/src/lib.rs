pub mod db;
pub use db::Db;

pub mod server;
pub use server::{Builder, ServerHandle};

pub use mockend_core::{
    async_trait,
    connection::{self, ConnectionDescriptor},
    driver::{self, Driver},
    schema::{FieldSchema, FieldType, Model},
    stmt, Error, Record, Result,
};

/// Stands up a mock CRUD backend for `model_name` on `port`, persisting to
/// the database named by `url`.
///
/// `schema` pairs field names with one of `"string"`, `"number"`,
/// `"boolean"` or `"date"`. The URL and the schema are validated before any
/// connection is opened or port bound.
///
/// The server runs until [`ServerHandle::shutdown`] is called. Dropping the
/// handle leaves it serving for the life of the runtime.
///
/// ```no_run
/// # async fn example() -> mockend::Result<()> {
/// let server = mockend::create_mock_backend(
///     5000,
///     "teacher",
///     [("name", "string"), ("age", "number")],
///     "mongodb://0.0.0.0:27017/students",
/// )
/// .await?;
///
/// server.shutdown().await?;
/// # Ok(())
/// # }
/// ```
pub async fn create_mock_backend<I, K, V>(
    port: u16,
    model_name: &str,
    schema: I,
    url: &str,
) -> Result<ServerHandle>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<str>,
{
    ConnectionDescriptor::parse(url)?;
    let fields = FieldSchema::parse(schema)?;

    Builder::new()
        .port(port)
        .model(model_name)
        .fields(fields)
        .url(url)
        .serve()
        .await
}
