mod config;
mod web;
mod web_metrics;

use anyhow::Result;
use clap::Parser;
use stockroom_db::StockroomDb;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::web::WebState;
use crate::web_metrics::{metrics_app, start_metrics_server};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let config = Config::parse();

    let metrics = metrics_app()?;
    let metrics_port = config.metrics_port;
    tokio::spawn(async move {
        if let Err(e) = start_metrics_server(metrics, metrics_port).await {
            error!("metrics server stopped {e:?}");
        }
    });

    info!("db starting");
    let db = StockroomDb::connect(config.db_options()).await?;
    web::start_web(WebState { db }, config.port).await
}
