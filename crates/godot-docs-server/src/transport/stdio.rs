//! stdio transport for MCP JSON-RPC

use crate::mcp::{
    InitializeResult, PromptsCapability, Request, RequestId, Response, ServerCapabilities,
    ServerInfo, ToolsCapability,
};
use crate::prompts::{get_prompt, list_prompts};
use crate::tools::{handle_tool_call, list_tools};
use crate::{DocsServer, SERVER_NAME};
use godot_docs_bridge::EngineClient;
use godot_docs_core::{DocsError, Result};
use serde_json::json;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

/// Run the MCP server on stdio
pub async fn run<C: EngineClient>(server: DocsServer<C>) -> Result<()> {
    let stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    info!("Godot Documentation MCP Server running on stdio");

    loop {
        line.clear();
        let bytes_read = reader
            .read_line(&mut line)
            .await
            .map_err(|e| DocsError::SocketError(format!("Failed to read stdin: {}", e)))?;

        if bytes_read == 0 {
            // EOF - client disconnected
            info!("Client disconnected (EOF)");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        debug!("Received: {}", trimmed);

        let request: Request = match serde_json::from_str(trimmed) {
            Ok(r) => r,
            Err(e) => {
                error!("Failed to parse request: {}", e);
                continue;
            }
        };

        // Id-less messages are notifications; nothing to answer.
        let Some(id) = request.id.clone() else {
            debug!("Notification: {}", request.method);
            continue;
        };

        let response = handle_request(&request, id, &server).await;
        let response_json = serde_json::to_string(&response)?;

        debug!("Sending: {}", response_json);

        stdout
            .write_all(response_json.as_bytes())
            .await
            .map_err(|e| DocsError::SocketError(format!("Failed to write stdout: {}", e)))?;
        stdout
            .write_all(b"\n")
            .await
            .map_err(|e| DocsError::SocketError(format!("Failed to write newline: {}", e)))?;
        stdout
            .flush()
            .await
            .map_err(|e| DocsError::SocketError(format!("Failed to flush stdout: {}", e)))?;
    }

    server.client.shutdown().await;

    Ok(())
}

async fn handle_request<C: EngineClient>(
    request: &Request,
    id: RequestId,
    server: &DocsServer<C>,
) -> Response {
    match request.method.as_str() {
        "initialize" => handle_initialize(id),
        "tools/list" => {
            Response::success(id, json!({ "tools": list_tools() }))
        }
        "tools/call" => handle_tools_call(request, id, server).await,
        "prompts/list" => {
            Response::success(id, json!({ "prompts": list_prompts() }))
        }
        "prompts/get" => handle_prompts_get(request, id),
        _ => Response::error(id, -32601, format!("Method not found: {}", request.method)),
    }
}

fn handle_initialize(id: RequestId) -> Response {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: ToolsCapability {
                list_changed: false,
            },
            prompts: PromptsCapability {
                list_changed: false,
            },
            logging: json!({}),
        },
        server_info: ServerInfo {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    match serde_json::to_value(result) {
        Ok(value) => Response::success(id, value),
        Err(e) => Response::error(id, -32603, format!("Failed to build initialize result: {}", e)),
    }
}

async fn handle_tools_call<C: EngineClient>(
    request: &Request,
    id: RequestId,
    server: &DocsServer<C>,
) -> Response {
    #[derive(serde::Deserialize)]
    struct ToolCallParams {
        name: String,
        #[serde(default)]
        arguments: serde_json::Value,
    }

    let params: ToolCallParams = match serde_json::from_value(request.params.clone()) {
        Ok(p) => p,
        Err(e) => {
            return Response::error(id, -32602, format!("Invalid tool call params: {}", e));
        }
    };

    handle_tool_call(&params.name, params.arguments, id, &server.client).await
}

fn handle_prompts_get(request: &Request, id: RequestId) -> Response {
    #[derive(serde::Deserialize)]
    struct PromptParams {
        name: String,
        #[serde(default)]
        arguments: serde_json::Value,
    }

    let params: PromptParams = match serde_json::from_value(request.params.clone()) {
        Ok(p) => p,
        Err(e) => {
            return Response::error(id, -32602, format!("Invalid prompt params: {}", e));
        }
    };

    // Prompt failures become JSON-RPC errors, not error-flagged results;
    // the asymmetry with tool calls is intentional.
    match get_prompt(&params.name, &params.arguments) {
        Ok(result) => Response::success(id, result),
        Err(e) => Response::error(id, -32602, e.to_string()),
    }
}
