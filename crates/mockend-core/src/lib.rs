pub mod connection;
pub use connection::ConnectionDescriptor;

pub mod driver;
pub use driver::Driver;

mod error;
pub use error::Error;

pub mod schema;
pub use schema::Model;

pub mod stmt;

/// A Result type alias that uses Mockend's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// The HTTP-facing form of a persisted row: a JSON object.
pub type Record = serde_json::Map<String, serde_json::Value>;

pub use async_trait::async_trait;
