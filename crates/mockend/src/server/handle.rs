use crate::{Db, Result};

use std::{io, net::SocketAddr};
use tokio::{sync::oneshot, task::JoinHandle};

/// A running mock backend.
///
/// Bundles the listener task with the database handle so both can be torn
/// down together. Dropping the handle detaches the server: it keeps serving
/// until the runtime shuts down, and its database connections are not
/// closed explicitly.
#[derive(Debug)]
pub struct ServerHandle {
    local_addr: SocketAddr,
    db: Db,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<io::Result<()>>,
}

impl ServerHandle {
    pub(super) fn new(
        local_addr: SocketAddr,
        db: Db,
        shutdown_tx: oneshot::Sender<()>,
        task: JoinHandle<io::Result<()>>,
    ) -> ServerHandle {
        ServerHandle {
            local_addr,
            db,
            shutdown_tx,
            task,
        }
    }

    /// The address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    /// Stops accepting connections, waits for in-flight requests to finish
    /// and closes the database connections.
    pub async fn shutdown(self) -> Result<()> {
        // The server may already have stopped on its own
        let _ = self.shutdown_tx.send(());

        tracing::info!(addr = %self.local_addr, "shutting down");

        finish(self.task, &self.db).await
    }

    /// Waits for the server to stop without requesting it to.
    ///
    /// The server only stops by itself when accepting connections fails.
    pub async fn wait(self) -> Result<()> {
        let ServerHandle {
            db,
            shutdown_tx,
            task,
            ..
        } = self;

        let result = finish(task, &db).await;
        drop(shutdown_tx);
        result
    }
}

async fn finish(task: JoinHandle<io::Result<()>>, db: &Db) -> Result<()> {
    let served = match task.await {
        Ok(result) => result.map_err(crate::Error::from),
        Err(err) => Err(crate::Error::from(anyhow::Error::from(err))),
    };

    let closed = db.close().await;

    served.and(closed)
}
