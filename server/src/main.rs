//! # MyKugy Server
//!
//! Thin entry point: load configuration, set up logging, serve `dist/`.

use mykugy_server::{init_tracing, start_server, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config.log_level);
    config.validate()?;

    start_server(config).await
}
