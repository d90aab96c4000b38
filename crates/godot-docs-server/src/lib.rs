//! # godot-docs-server
//!
//! MCP server exposing Godot class documentation tools.
//!
//! This crate provides:
//! - MCP JSON-RPC protocol handling over stdio
//! - The seven documentation tools and their text formatters
//! - Two canned prompt templates

pub mod format;
pub mod mcp;
pub mod prompts;
pub mod tools;
pub mod transport;

use godot_docs_bridge::EngineClient;
use godot_docs_core::Result;
use std::sync::Arc;

/// Server name reported during the MCP handshake
pub const SERVER_NAME: &str = "godot-docs-server";

/// Godot documentation MCP server
pub struct DocsServer<C: EngineClient> {
    /// RPC client for the running editor
    pub(crate) client: Arc<C>,
}

impl<C: EngineClient> DocsServer<C> {
    /// Create a new server over the given engine client
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Run the server on stdio transport
    pub async fn run_stdio(self) -> Result<()> {
        transport::stdio::run(self).await
    }

    /// Access the underlying engine client
    pub fn client(&self) -> &Arc<C> {
        &self.client
    }
}
