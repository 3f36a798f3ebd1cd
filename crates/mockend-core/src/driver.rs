mod capability;
pub use capability::Capability;

pub mod operation;
pub use operation::Operation;

mod response;
pub use response::{Response, Rows};

use crate::{async_trait, schema::Model};

use std::fmt::Debug;

/// The persistence capability a mock backend needs: register one model, then
/// run create / find-all / find-by-id / update-by-id / delete-by-id
/// operations against it.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Describes the driver's capability.
    fn capability(&self) -> &'static Capability;

    /// Register the model with the driver.
    ///
    /// Maps the model's field schema to native types and synchronizes the
    /// backing table or collection. Must complete before operations are
    /// executed.
    async fn register_model(&mut self, model: &Model) -> crate::Result<()>;

    /// Execute a database operation
    async fn exec(&self, op: Operation) -> crate::Result<Response>;

    /// Release the driver's connections.
    async fn close(&self) -> crate::Result<()> {
        Ok(())
    }
}
