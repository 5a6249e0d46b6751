//! Online Deck Backend Binary
//!
//! Serves the deck repository over HTTP.
//! Listens on --bind / BIND_ADDR (default 0.0.0.0:8888).

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = odk_server::Config::parse();
    odk_core::log();
    odk_server::run(config).await?;
    log::info!("deck server stopped");
    Ok(())
}
