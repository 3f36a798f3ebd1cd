//! Connection URL parsing.
//!
//! A connection URL decides which driver serves a model. The scheme prefix
//! alone determines the engine family:
//!
//! | Prefix            | Engine                  |
//! |-------------------|-------------------------|
//! | `mongodb://`      | document store          |
//! | `mongodb+srv://`  | document store          |
//! | `mysql://`        | relational, MySQL       |
//! | `postgresql://`   | relational, PostgreSQL  |

use crate::{Error, Result};

use percent_encoding::percent_decode_str;
use std::fmt;
use url::Url;

/// Database used by the document store when the URL names none.
const DEFAULT_DOCUMENT_DATABASE: &str = "test";

/// Parsed form of a connection URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionDescriptor {
    /// Engine family, decided by the URL prefix
    pub engine: Engine,

    /// The URL exactly as supplied
    pub url: String,

    /// User credentials (relational only)
    pub credentials: Option<Credentials>,

    /// Database server host (relational only)
    pub host: Option<String>,

    /// Database server port (relational only; defaults per dialect)
    pub port: Option<u16>,

    /// Database name
    pub database: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// Schema-less document store (MongoDB)
    Document,

    /// Table-based store
    Relational(Dialect),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    MySQL,
    PostgreSQL,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: Option<String>,
}

impl ConnectionDescriptor {
    /// Parses a connection URL.
    ///
    /// Fails with [`Error::unsupported_connection_url`] when the prefix is not
    /// recognized, and with [`Error::invalid_connection_url`] when a
    /// relational URL is missing its host or database.
    pub fn parse(url: &str) -> Result<ConnectionDescriptor> {
        let url = url.trim();

        if url.starts_with("mongodb://") || url.starts_with("mongodb+srv://") {
            Ok(Self::parse_document(url))
        } else if url.starts_with("mysql://") {
            Self::parse_relational(url, Dialect::MySQL)
        } else if url.starts_with("postgresql://") {
            Self::parse_relational(url, Dialect::PostgreSQL)
        } else {
            Err(Error::unsupported_connection_url(url))
        }
    }

    /// The database name is the final path segment; everything else is left
    /// for the MongoDB client, which understands multi-host and SRV URLs.
    fn parse_document(url: &str) -> ConnectionDescriptor {
        let without_query = url.split('?').next().unwrap_or(url);
        let after_scheme = without_query
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(without_query);

        let database = after_scheme
            .split_once('/')
            .and_then(|(_, path)| path.rsplit('/').next())
            .filter(|database| !database.is_empty())
            .unwrap_or(DEFAULT_DOCUMENT_DATABASE);

        ConnectionDescriptor {
            engine: Engine::Document,
            url: url.to_string(),
            credentials: None,
            host: None,
            port: None,
            database: database.to_string(),
        }
    }

    fn parse_relational(raw: &str, dialect: Dialect) -> Result<ConnectionDescriptor> {
        let url = Url::parse(raw)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={raw}")))?;

        let host = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| Error::invalid_connection_url(format!("missing host; url={raw}")))?;

        let database = url.path().trim_start_matches('/');

        if database.is_empty() || database.contains('/') {
            return Err(Error::invalid_connection_url(format!(
                "no database specified - expected a single path segment; url={raw}"
            )));
        }

        let credentials = if url.username().is_empty() {
            None
        } else {
            Some(Credentials {
                username: decode_userinfo(url.username(), raw)?,
                password: url
                    .password()
                    .map(|password| decode_userinfo(password, raw))
                    .transpose()?,
            })
        };

        Ok(ConnectionDescriptor {
            engine: Engine::Relational(dialect),
            url: raw.to_string(),
            credentials,
            host: Some(host.to_string()),
            port: Some(url.port().unwrap_or(dialect.default_port())),
            database: database.to_string(),
        })
    }

    pub fn is_document(&self) -> bool {
        matches!(self.engine, Engine::Document)
    }

    pub fn is_relational(&self) -> bool {
        matches!(self.engine, Engine::Relational(_))
    }
}

/// Userinfo is percent-encoded in the URL; drivers expect the plain text.
fn decode_userinfo(encoded: &str, raw: &str) -> Result<String> {
    percent_decode_str(encoded)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|err| Error::invalid_connection_url(format!("credentials: {err}; url={raw}")))
}

impl Dialect {
    pub fn default_port(self) -> u16 {
        match self {
            Dialect::MySQL => 3306,
            Dialect::PostgreSQL => 5432,
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Engine::Document => f.write_str("mongodb"),
            Engine::Relational(Dialect::MySQL) => f.write_str("mysql"),
            Engine::Relational(Dialect::PostgreSQL) => f.write_str("postgresql"),
        }
    }
}
