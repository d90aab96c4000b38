//! JSON-RPC envelopes exchanged with the editor plugin

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outbound request envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: Value,
    pub id: u64,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>, params: Value, id: u64) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: method.into(),
            params,
            id,
        }
    }
}

/// Inbound reply envelope: `result` on success, `error` on failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcReply {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorBody>,
}

/// Error body of a failed reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl RpcErrorBody {
    /// Error message, with a generic fallback when the plugin omits it
    pub fn message(&self) -> String {
        self.message.clone().unwrap_or_else(|| "RPC error".to_string())
    }
}
