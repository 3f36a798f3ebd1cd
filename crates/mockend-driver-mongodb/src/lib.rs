mod op;
pub mod ty;
pub mod value;

pub use ty::{BsonType, DocumentSchema};

use mockend_core::{
    async_trait,
    connection::{ConnectionDescriptor, Engine},
    driver::{operation::Operation, Capability, Driver, Response},
    schema::Model,
    Error, Result,
};
use mongodb::{
    bson::{self, Document},
    Client, Collection, Database,
};

#[derive(Debug)]
pub struct MongoDb {
    client: Client,
    database: Database,

    /// Set once the model is registered
    model: Option<Registered>,
}

#[derive(Debug)]
struct Registered {
    collection: Collection<Document>,
    schema: DocumentSchema,
}

impl MongoDb {
    pub fn new(client: Client, database: Database) -> Self {
        Self {
            client,
            database,
            model: None,
        }
    }

    /// Creates a client for a `mongodb://` or `mongodb+srv://` URL.
    ///
    /// The client connects lazily: an unreachable server surfaces as an error
    /// from the first operation, not from this call.
    pub async fn connect(descriptor: &ConnectionDescriptor) -> Result<Self> {
        if descriptor.engine != Engine::Document {
            return Err(Error::unsupported_connection_url(&descriptor.url));
        }

        let client = Client::with_uri_str(&descriptor.url)
            .await
            .map_err(Error::driver)?;

        let database = client.database(&descriptor.database);

        Ok(Self::new(client, database))
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    fn registered(&self) -> Result<&Registered> {
        self.model
            .as_ref()
            .ok_or_else(|| mockend_core::err!("no model registered with the MongoDB driver"))
    }
}

#[async_trait]
impl Driver for MongoDb {
    fn capability(&self) -> &'static Capability {
        &Capability::MONGODB
    }

    async fn register_model(&mut self, model: &Model) -> Result<()> {
        let schema = ty::map_schema(&model.fields);
        let collection_name = model.table_name();

        tracing::info!(
            collection = %collection_name,
            database = %self.database.name(),
            "registered model"
        );

        self.model = Some(Registered {
            collection: self.database.collection::<bson::Document>(&collection_name),
            schema,
        });

        Ok(())
    }

    async fn exec(&self, op: Operation) -> Result<Response> {
        let registered = self.registered()?;
        op::execute_operation(&registered.collection, &registered.schema, op).await
    }

    async fn close(&self) -> Result<()> {
        self.client.clone().shutdown().await;
        Ok(())
    }
}
