use mockend_core::{
    connection::{ConnectionDescriptor, Dialect, Engine},
    Driver, Result,
};

/// Picks the driver for a parsed connection URL.
pub(super) async fn connect(descriptor: &ConnectionDescriptor) -> Result<Box<dyn Driver>> {
    match descriptor.engine {
        Engine::Document => connect_mongodb(descriptor).await,
        Engine::Relational(Dialect::MySQL) => connect_mysql(descriptor),
        Engine::Relational(Dialect::PostgreSQL) => connect_postgresql(descriptor).await,
    }
}

#[cfg(feature = "mongodb")]
async fn connect_mongodb(descriptor: &ConnectionDescriptor) -> Result<Box<dyn Driver>> {
    let driver = mockend_driver_mongodb::MongoDb::connect(descriptor).await?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "mongodb"))]
async fn connect_mongodb(_descriptor: &ConnectionDescriptor) -> Result<Box<dyn Driver>> {
    mockend_core::bail!("`mongodb` feature not enabled")
}

#[cfg(feature = "mysql")]
fn connect_mysql(descriptor: &ConnectionDescriptor) -> Result<Box<dyn Driver>> {
    let driver = mockend_driver_mysql::MySQL::connect(descriptor)?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "mysql"))]
fn connect_mysql(_descriptor: &ConnectionDescriptor) -> Result<Box<dyn Driver>> {
    mockend_core::bail!("`mysql` feature not enabled")
}

#[cfg(feature = "postgresql")]
async fn connect_postgresql(descriptor: &ConnectionDescriptor) -> Result<Box<dyn Driver>> {
    let driver = mockend_driver_postgresql::PostgreSQL::connect(descriptor).await?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "postgresql"))]
async fn connect_postgresql(_descriptor: &ConnectionDescriptor) -> Result<Box<dyn Driver>> {
    mockend_core::bail!("`postgresql` feature not enabled")
}
