//! Spoken Time Server Binary

use anyhow::Result;
use spoken_time_server::{load_config, Server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration before logging so the level and format apply
    let config = load_config()?;
    spoken_time_common_log::init(config.logging.to_log_config())?;

    info!(
        "Starting Spoken Time Server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let server = Server::new(config)?;
    server.run().await?;

    info!("Server shutdown complete");
    Ok(())
}
