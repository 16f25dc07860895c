//! Catalog consumer entrypoint.

use std::io::{BufReader, stdin, stdout};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use catalog_consumer::client::ProductClient;
use catalog_consumer::{Config, console};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let client = ProductClient::new(&config)?;

    let mut input = BufReader::new(stdin());
    let mut output = stdout();
    console::run(&client, &mut input, &mut output).await?;

    Ok(())
}
