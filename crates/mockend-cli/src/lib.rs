mod config;
pub use config::Config;

mod utility;

use anyhow::Result;
use clap::Parser;
use console::style;
use mockend::Builder;
use std::{future::Future, net::IpAddr, path::PathBuf};

/// Command-line front end for serving a mock backend.
#[derive(Parser, Debug)]
#[command(name = "mockend")]
#[command(about = "Mockend - serve a mock CRUD backend for one model")]
#[command(version)]
pub struct Cli {
    /// Database connection URL (mongodb://, mongodb+srv://, mysql:// or postgresql://)
    #[arg(long, env = "DATABASE_URL")]
    pub url: String,

    /// Name of the model to serve
    #[arg(short, long, env = "MOCKEND_MODEL")]
    pub model: String,

    /// Port to listen on
    #[arg(short, long, env = "MOCKEND_PORT", default_value_t = Builder::DEFAULT_PORT)]
    pub port: u16,

    /// Address to listen on
    #[arg(long, env = "MOCKEND_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Declare a field, e.g. `--field age=number`. May be repeated.
    #[arg(short, long = "field", value_name = "NAME=TYPE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// JSON file mapping field names to types. `--field` entries override it.
    #[arg(long, value_name = "FILE")]
    pub schema: Option<PathBuf>,
}

fn parse_field(arg: &str) -> std::result::Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, ty)) if !name.is_empty() => Ok((name.to_string(), ty.to_string())),
        _ => Err(format!("expected NAME=TYPE, got `{arg}`")),
    }
}

/// Parses the process arguments and serves until `shutdown` completes.
pub async fn parse_and_run(shutdown: impl Future<Output = ()>) -> Result<()> {
    let cli = Cli::parse();
    run(Config::from_cli(cli)?, shutdown).await
}

/// Serves the configured model until `shutdown` completes, then stops the
/// server and closes the database connections.
pub async fn run(config: Config, shutdown: impl Future<Output = ()>) -> Result<()> {
    let server = config.builder().serve().await?;

    println!();
    println!(
        "  {} {}",
        style("Mockend").cyan().bold(),
        style(format!("serving `{}`", config.model)).bold()
    );
    println!(
        "  {} http://{}/api/model",
        style("listening").dim(),
        server.local_addr()
    );
    println!(
        "  {} {}",
        style("database").dim(),
        utility::redact_url_password(&config.url)
    );
    println!();

    shutdown.await;
    server.shutdown().await?;

    Ok(())
}
