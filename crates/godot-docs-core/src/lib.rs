//! # godot-docs-core
//!
//! Core types for the Godot documentation MCP bridge.
//!
//! This crate provides the foundational types shared across the bridge:
//! - Error taxonomy and `Result` alias
//! - Typed reply models for each documentation RPC

pub mod error;
pub mod reply;

pub use error::{DocsError, Result};
pub use reply::{
    ClassDocReply, ClassListReply, DocItem, HierarchyReply, MethodsReply, PropertiesReply,
    SearchReply, SignalsReply,
};
