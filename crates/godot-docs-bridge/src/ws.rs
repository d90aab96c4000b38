//! WebSocket transport implementation
//!
//! Wraps the split halves of a tokio-tungstenite stream in the
//! FrameReader/FrameWriter traits used by the correlation loop.

use crate::transport::{FrameReader, FrameWriter};
use async_trait::async_trait;
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use godot_docs_core::{DocsError, Result};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::debug;

pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// WebSocket read wrapper
pub struct WsReadWrapper(pub SplitStream<WsStream>);

#[async_trait]
impl FrameReader for WsReadWrapper {
    async fn read_frame(&mut self) -> Result<Option<String>> {
        loop {
            match self.0.next().await {
                Some(Ok(Message::Text(text))) => return Ok(Some(text)),
                Some(Ok(Message::Close(_))) => return Ok(None),
                Some(Ok(other)) => {
                    // Ping/pong/binary frames carry no RPC payload
                    debug!("Skipping non-text frame: {:?}", other);
                }
                Some(Err(e)) => {
                    return Err(DocsError::SocketError(format!("WebSocket read failed: {}", e)));
                }
                None => return Ok(None),
            }
        }
    }
}

/// WebSocket write wrapper
pub struct WsWriteWrapper(pub SplitSink<WsStream, Message>);

#[async_trait]
impl FrameWriter for WsWriteWrapper {
    async fn write_frame(&mut self, text: &str) -> Result<()> {
        self.0
            .send(Message::Text(text.to_string()))
            .await
            .map_err(|e| DocsError::SocketError(format!("WebSocket send failed: {}", e)))
    }
}
