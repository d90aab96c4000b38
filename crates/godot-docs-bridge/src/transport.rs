//! Transport abstractions for the engine connection
//!
//! Provides FrameReader/FrameWriter traits so the correlation loop can run
//! over any text-frame transport (WebSocket in production, scripted fakes
//! in tests).

use crate::correlator::Correlator;
use crate::protocol::RpcReply;
use async_trait::async_trait;
use godot_docs_core::Result;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Trait for async reading of text frames
#[async_trait]
pub trait FrameReader: Send + 'static {
    /// Read the next text frame; `Ok(None)` means the peer closed cleanly
    async fn read_frame(&mut self) -> Result<Option<String>>;
}

/// Trait for async writing of text frames
#[async_trait]
pub trait FrameWriter: Send + Sync {
    /// Write one complete text frame
    async fn write_frame(&mut self, text: &str) -> Result<()>;
}

/// Background reader loop for one connection.
///
/// Parses each inbound frame as a reply envelope and resolves the matching
/// pending request. Malformed frames are logged and dropped; replies whose
/// id is no longer pending are ignored. Returns when the connection ends,
/// leaving disconnect handling to the caller.
pub async fn reader_task<R: FrameReader>(mut reader: R, correlator: Arc<Correlator>) {
    loop {
        match reader.read_frame().await {
            Ok(Some(text)) => {
                debug!("[Godot→Rust] {}", preview(&text));

                let reply: RpcReply = match serde_json::from_str(&text) {
                    Ok(reply) => reply,
                    Err(e) => {
                        error!("Error parsing WebSocket message: {}", e);
                        continue;
                    }
                };

                let Some(id) = reply.id else {
                    debug!("Frame without id, dropping");
                    continue;
                };

                let outcome = match reply.error {
                    Some(err) => Err(godot_docs_core::DocsError::RemoteError(err.message())),
                    None => Ok(reply.result.unwrap_or(Value::Null)),
                };

                if !correlator.complete(id, outcome).await {
                    debug!("Reply for unknown request id {}, ignoring", id);
                }
            }
            Ok(None) => {
                info!("Connection to Godot closed");
                break;
            }
            Err(e) => {
                error!("Reader task failed: {}", e);
                break;
            }
        }
    }
}

fn preview(text: &str) -> String {
    text.chars().take(200).collect()
}
