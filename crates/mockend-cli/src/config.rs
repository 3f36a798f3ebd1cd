use crate::Cli;

use anyhow::{Context, Result};
use mockend::{Builder, FieldSchema, FieldType};
use std::{fs, net::IpAddr, path::Path};

/// Resolved settings for one mock backend
#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub model: String,
    pub host: IpAddr,
    pub port: u16,
    pub fields: FieldSchema,
}

impl Config {
    /// Resolves command-line arguments, loading the schema file if one was
    /// given.
    pub fn from_cli(cli: Cli) -> Result<Config> {
        let mut fields = match &cli.schema {
            Some(path) => load_schema(path)?,
            None => FieldSchema::new(),
        };

        for (name, ty) in cli.fields {
            let ty = FieldType::parse(&name, &ty)
                .with_context(|| format!("invalid `--field {name}={ty}`"))?;
            fields.insert(name, ty)?;
        }

        Ok(Config {
            url: cli.url,
            model: cli.model,
            host: cli.host,
            port: cli.port,
            fields,
        })
    }

    pub fn builder(&self) -> Builder {
        let mut builder = Builder::new();
        builder
            .host(self.host)
            .port(self.port)
            .model(&self.model)
            .fields(self.fields.clone())
            .url(&self.url);
        builder
    }
}

fn load_schema(path: &Path) -> Result<FieldSchema> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read schema file {}", path.display()))?;
    let json: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("schema file {} is not valid JSON", path.display()))?;

    FieldSchema::from_json(&json)
        .with_context(|| format!("invalid schema file {}", path.display()))
}
