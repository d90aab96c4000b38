//! Bridge to a running Godot editor over WebSocket

use crate::config::BridgeConfig;
use crate::correlator::Correlator;
use crate::protocol::RpcRequest;
use crate::transport::{FrameWriter, reader_task};
use crate::ws::{WsReadWrapper, WsWriteWrapper};
use async_trait::async_trait;
use futures_util::StreamExt;
use godot_docs_core::{DocsError, Result};
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tokio::time::{sleep, timeout};
use tokio_tungstenite::connect_async;
use tracing::{debug, info, warn};

/// RPC client interface for the tool dispatcher.
///
/// Implemented by `EngineBridge`; tests inject fakes.
#[async_trait]
pub trait EngineClient: Send + Sync + 'static {
    /// Send one RPC and await its correlated reply
    async fn call(&self, method: &str, params: Value) -> Result<Value>;

    /// Whether the engine connection is currently open
    fn is_connected(&self) -> bool;

    /// Tear down the connection and disable reconnection
    async fn shutdown(&self);
}

/// Persistent connection to the editor's documentation plugin.
///
/// Owns the connection handle, the reconnect timer, the id counter and the
/// pending-request table; constructed once at startup and shared by `Arc`.
pub struct EngineBridge {
    config: BridgeConfig,
    writer: Mutex<Option<Box<dyn FrameWriter>>>,
    correlator: Arc<Correlator>,
    connected: AtomicBool,
    reconnect_armed: AtomicBool,
    shut_down: AtomicBool,
}

impl EngineBridge {
    /// Create a bridge (not connected yet)
    pub fn new(config: BridgeConfig) -> Arc<Self> {
        Arc::new(Self {
            config,
            writer: Mutex::new(None),
            correlator: Arc::new(Correlator::new()),
            connected: AtomicBool::new(false),
            reconnect_armed: AtomicBool::new(false),
            shut_down: AtomicBool::new(false),
        })
    }

    /// Open the WebSocket connection and spawn the reader loop
    pub async fn connect(self: &Arc<Self>) -> Result<()> {
        info!("Connecting to Godot at {}...", self.config.url);

        let (stream, _) = connect_async(self.config.url.as_str())
            .await
            .map_err(|e| DocsError::ConnectError(e.to_string()))?;
        let (sink, stream) = stream.split();

        {
            let mut guard = self.writer.lock().await;
            *guard = Some(Box::new(WsWriteWrapper(sink)));
        }
        self.connected.store(true, Ordering::SeqCst);
        info!("Connected to Godot Documentation Server");

        let bridge = Arc::clone(self);
        tokio::spawn(async move {
            reader_task(WsReadWrapper(stream), Arc::clone(&bridge.correlator)).await;
            bridge.on_disconnect().await;
        });

        Ok(())
    }

    /// Send an RPC request and wait for its reply or the fixed timeout
    pub async fn send_rpc_request(&self, method: &str, params: Value) -> Result<Value> {
        if !self.connected.load(Ordering::SeqCst) {
            return Err(DocsError::NotConnected);
        }

        let (id, rx) = self.correlator.register().await;
        let request = RpcRequest::new(method, params, id);
        let text = serde_json::to_string(&request)?;
        debug!("[Rust→Godot] {}", text);

        {
            let mut guard = self.writer.lock().await;
            let writer = match guard.as_mut() {
                Some(writer) => writer,
                None => {
                    self.correlator.remove(id).await;
                    return Err(DocsError::NotConnected);
                }
            };
            if let Err(e) = writer.write_frame(&text).await {
                self.correlator.remove(id).await;
                return Err(e);
            }
        }

        match timeout(self.config.request_timeout, rx).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(_)) => Err(DocsError::SocketError(
                "connection lost before reply".to_string(),
            )),
            Err(_) => {
                self.correlator.remove(id).await;
                Err(DocsError::Timeout)
            }
        }
    }

    /// Arm the reconnect timer.
    ///
    /// Returns false when already armed or the bridge is shut down; only one
    /// timer ever runs at a time. On a failed attempt the timer re-arms
    /// itself, giving unbounded retry at a constant interval.
    pub fn schedule_reconnect(self: &Arc<Self>) -> bool {
        if self.shut_down.load(Ordering::SeqCst) {
            return false;
        }
        if self.reconnect_armed.swap(true, Ordering::SeqCst) {
            return false;
        }

        let bridge = Arc::clone(self);
        tokio::spawn(async move {
            sleep(bridge.config.reconnect_delay).await;
            bridge.reconnect_armed.store(false, Ordering::SeqCst);
            if bridge.shut_down.load(Ordering::SeqCst) {
                return;
            }
            info!("Attempting to reconnect to Godot...");
            if let Err(e) = bridge.connect().await {
                warn!("Reconnection failed: {}", e);
                bridge.schedule_reconnect();
            }
        });
        true
    }

    /// Tear down the connection; no further reconnects are scheduled
    pub async fn shutdown(&self) {
        self.shut_down.store(true, Ordering::SeqCst);
        self.connected.store(false, Ordering::SeqCst);
        {
            let mut guard = self.writer.lock().await;
            *guard = None;
        }
        self.correlator.fail_all().await;
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Number of calls awaiting a reply
    pub async fn pending_count(&self) -> usize {
        self.correlator.pending_count().await
    }

    async fn on_disconnect(self: &Arc<Self>) {
        self.connected.store(false, Ordering::SeqCst);
        {
            let mut guard = self.writer.lock().await;
            *guard = None;
        }
        self.correlator.fail_all().await;
        if !self.shut_down.load(Ordering::SeqCst) {
            info!("Connection to Godot closed. Attempting to reconnect...");
            self.schedule_reconnect();
        }
    }

    #[cfg(test)]
    pub(crate) async fn install_writer_for_test(&self, writer: Box<dyn FrameWriter>) {
        let mut guard = self.writer.lock().await;
        *guard = Some(writer);
        self.connected.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl EngineClient for EngineBridge {
    async fn call(&self, method: &str, params: Value) -> Result<Value> {
        self.send_rpc_request(method, params).await
    }

    fn is_connected(&self) -> bool {
        EngineBridge::is_connected(self)
    }

    async fn shutdown(&self) {
        EngineBridge::shutdown(self).await;
    }
}
