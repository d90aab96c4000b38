//! # godot-docs-bridge
//!
//! Persistent WebSocket RPC client for a running Godot editor.
//!
//! This crate provides:
//! - `EngineBridge`: one outbound connection with fixed-delay reconnect
//! - Request/response correlation by monotonic numeric id
//! - `EngineClient` trait so callers can be tested with a fake engine

pub mod bridge;
pub mod config;
pub mod correlator;
pub mod protocol;
pub mod transport;
pub mod ws;

pub use bridge::{EngineBridge, EngineClient};
pub use config::BridgeConfig;
pub use correlator::Correlator;
