//! Godot Documentation MCP Server
//!
//! Connects to a running Godot Editor's documentation plugin over WebSocket
//! and serves ClassDB lookups as MCP tools on stdio.

use anyhow::Result;
use godot_docs_bridge::{BridgeConfig, EngineBridge};
use godot_docs_server::DocsServer;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the MCP transport.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = BridgeConfig::from_env();
    info!("Godot docs MCP server starting (engine at {})", config.url);

    let bridge = EngineBridge::new(config);
    if let Err(e) = bridge.connect().await {
        warn!("Failed to connect to Godot: {}", e);
        warn!("Will continue attempting to reconnect...");
        bridge.schedule_reconnect();
    }

    let server = DocsServer::new(bridge);
    server.run_stdio().await?;

    Ok(())
}
