mod connect;

use mockend_core::{
    connection::ConnectionDescriptor,
    driver::{
        operation::{DeleteById, FindAll, GetById, Insert, UpdateById},
        Capability, Driver, Operation, Response,
    },
    Error, Model, Record, Result,
};

use std::sync::Arc;

/// A handle to the persisted records of one model.
///
/// Cloning is cheap; all clones share the same driver.
#[derive(Debug, Clone)]
pub struct Db {
    driver: Arc<dyn Driver>,
    model: Arc<Model>,
}

impl Db {
    /// Connects to the database described by `descriptor` and registers
    /// `model` with it.
    ///
    /// The driver is picked from the descriptor's engine. Relational drivers
    /// create the model's table here.
    pub async fn connect(descriptor: &ConnectionDescriptor, model: Model) -> Result<Db> {
        let driver = connect::connect(descriptor).await?;
        Db::register(driver, model).await
    }

    /// Registers `model` with an already constructed driver.
    pub async fn from_driver(driver: impl Driver, model: Model) -> Result<Db> {
        Db::register(Box::new(driver), model).await
    }

    async fn register(mut driver: Box<dyn Driver>, model: Model) -> Result<Db> {
        if let Err(err) = driver.register_model(&model).await {
            if let Err(close_err) = driver.close().await {
                tracing::warn!(error = %close_err, "failed to close driver");
            }
            return Err(err.context(mockend_core::err!(
                "failed to register model `{}`",
                model.name
            )));
        }

        if driver.capability().schema_sync {
            tracing::info!(
                model = %model.name,
                table = %model.table_name(),
                "table ready"
            );
        }

        Ok(Db {
            driver: Arc::from(driver),
            model: Arc::new(model),
        })
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn capability(&self) -> &'static Capability {
        self.driver.capability()
    }

    /// Persists a new record built from a JSON request body.
    pub async fn create(&self, body: &serde_json::Value) -> Result<Record> {
        let row = self.model.row_from_json(body)?;

        self.exec(Insert { row })
            .await?
            .rows
            .into_first()?
            .map(|row| row.into_record())
            .ok_or_else(|| Error::invalid_result("insert returned no record"))
    }

    pub async fn find_all(&self) -> Result<Vec<Record>> {
        let rows = self.exec(FindAll {}).await?.rows.into_values()?;
        Ok(rows.into_iter().map(|row| row.into_record()).collect())
    }

    /// Returns `None` when no record has the given id.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Record>> {
        let row = self
            .exec(GetById { id: id.to_string() })
            .await?
            .rows
            .into_first()?;

        Ok(row.map(|row| row.into_record()))
    }

    /// Applies the declared fields of `body` to a record and returns the
    /// updated record, `None` when no record has the given id.
    pub async fn update_by_id(&self, id: &str, body: &serde_json::Value) -> Result<Option<Record>> {
        let assignments = self.model.row_from_json(body)?;

        let row = self
            .exec(UpdateById {
                id: id.to_string(),
                assignments,
            })
            .await?
            .rows
            .into_first()?;

        Ok(row.map(|row| row.into_record()))
    }

    /// Returns `false` when no record has the given id.
    pub async fn delete_by_id(&self, id: &str) -> Result<bool> {
        let count = self
            .exec(DeleteById { id: id.to_string() })
            .await?
            .rows
            .into_count()?;

        Ok(count > 0)
    }

    /// Releases the driver's connections.
    pub async fn close(&self) -> Result<()> {
        self.driver.close().await
    }

    async fn exec(&self, op: impl Into<Operation>) -> Result<Response> {
        let op = op.into();
        tracing::debug!(operation = op.name(), model = %self.model.name, "exec");
        self.driver.exec(op).await
    }
}
