use super::ServerHandle;
use crate::{Db, Result};

use mockend_core::{
    schema::{FieldSchema, FieldType},
    ConnectionDescriptor, Driver, Error, Model,
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::{net::TcpListener, sync::oneshot};

/// Configures and starts a mock backend.
#[derive(Debug, Clone)]
pub struct Builder {
    host: IpAddr,
    port: u16,
    model: Option<String>,
    fields: FieldSchema,
    url: Option<String>,
}

impl Builder {
    pub const DEFAULT_PORT: u16 = 5000;

    pub fn new() -> Builder {
        Builder {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: Builder::DEFAULT_PORT,
            model: None,
            fields: FieldSchema::new(),
            url: None,
        }
    }

    /// Address to bind, `0.0.0.0` by default
    pub fn host(&mut self, host: IpAddr) -> &mut Self {
        self.host = host;
        self
    }

    /// Port to bind; `0` picks a free port
    pub fn port(&mut self, port: u16) -> &mut Self {
        self.port = port;
        self
    }

    pub fn model(&mut self, name: impl Into<String>) -> &mut Self {
        self.model = Some(name.into());
        self
    }

    /// Replaces the declared fields
    pub fn fields(&mut self, fields: FieldSchema) -> &mut Self {
        self.fields = fields;
        self
    }

    /// Declares one field
    pub fn field(&mut self, name: impl Into<String>, ty: FieldType) -> Result<&mut Self> {
        self.fields.insert(name, ty)?;
        Ok(self)
    }

    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    /// Connects to the configured database and starts serving.
    ///
    /// Relational drivers create the model's table before the listener is
    /// bound; any failure is returned and nothing is left running.
    pub async fn serve(&self) -> Result<ServerHandle> {
        let Some(url) = &self.url else {
            return Err(Error::invalid_connection_url("no connection URL configured"));
        };

        let descriptor = ConnectionDescriptor::parse(url)?;
        let model = self.build_model()?;

        tracing::info!(
            engine = %descriptor.engine,
            database = %descriptor.database,
            model = %model.name,
            "connecting"
        );

        let db = Db::connect(&descriptor, model).await?;
        self.listen(db).await
    }

    /// Starts serving over an already constructed driver.
    pub async fn serve_with_driver(&self, driver: impl Driver) -> Result<ServerHandle> {
        let model = self.build_model()?;
        let db = Db::from_driver(driver, model).await?;
        self.listen(db).await
    }

    fn build_model(&self) -> Result<Model> {
        let name = self.model.as_deref().unwrap_or_default();
        Model::new(name, self.fields.clone())
    }

    async fn listen(&self, db: Db) -> Result<ServerHandle> {
        let addr = SocketAddr::new(self.host, self.port);

        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(err) => {
                if let Err(close_err) = db.close().await {
                    tracing::warn!(error = %close_err, "failed to close database");
                }
                return Err(Error::from(err).context(mockend_core::err!("failed to bind {addr}")));
            }
        };

        let local_addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let app = super::router(db.clone());
        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    // A dropped handle detaches the server; only an explicit
                    // shutdown stops it
                    if shutdown_rx.await.is_err() {
                        std::future::pending::<()>().await;
                    }
                })
                .await
        });

        tracing::info!(
            addr = %local_addr,
            model = %db.model().name,
            "mock backend listening"
        );

        Ok(ServerHandle::new(local_addr, db, shutdown_tx, task))
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}
