//! MCP server transports

pub mod stdio;
