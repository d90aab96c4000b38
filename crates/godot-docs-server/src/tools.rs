//! MCP tool handlers for the documentation operations

use crate::format;
use crate::mcp::{RequestId, Response};
use godot_docs_bridge::EngineClient;
use godot_docs_core::{
    ClassDocReply, ClassListReply, DocsError, HierarchyReply, MethodsReply, PropertiesReply,
    Result, SearchReply, SignalsReply,
};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;

/// Tool definition for MCP tools/list
#[derive(Debug, Clone, Serialize)]
pub struct ToolDef {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

fn class_name_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "class_name": {
                "type": "string",
                "description": description
            }
        },
        "required": ["class_name"]
    })
}

/// Get list of available tools
pub fn list_tools() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: "get_class_doc".into(),
            description: "Get full documentation for a Godot class from the running Godot Editor"
                .into(),
            input_schema: class_name_schema(
                "Name of the Godot class (e.g., 'Node', 'Control', 'Area2D')",
            ),
        },
        ToolDef {
            name: "search_classes".into(),
            description: "Search for Godot classes by name pattern".into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "pattern": {
                        "type": "string",
                        "description": "Search pattern (e.g., 'Area', 'Node')"
                    }
                },
                "required": ["pattern"]
            }),
        },
        ToolDef {
            name: "get_class_methods".into(),
            description: "Get list of methods for a Godot class".into(),
            input_schema: class_name_schema("Name of the Godot class"),
        },
        ToolDef {
            name: "get_class_properties".into(),
            description: "Get list of properties for a Godot class".into(),
            input_schema: class_name_schema("Name of the Godot class"),
        },
        ToolDef {
            name: "get_class_signals".into(),
            description: "Get list of signals for a Godot class".into(),
            input_schema: class_name_schema("Name of the Godot class"),
        },
        ToolDef {
            name: "get_class_hierarchy".into(),
            description: "Get the inheritance hierarchy for a Godot class".into(),
            input_schema: class_name_schema("Name of the Godot class"),
        },
        ToolDef {
            name: "list_all_classes".into(),
            description: "List all available Godot classes in the running Godot Editor".into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "filter": {
                        "type": "string",
                        "description": "Optional filter pattern to narrow results"
                    }
                }
            }),
        },
    ]
}

/// Coerce a required string argument.
///
/// An absent argument becomes the literal string "undefined" — a quirk the
/// editor plugin has come to expect, kept deliberately.
fn coerce_arg(arguments: &Value, key: &str) -> String {
    match arguments.get(key) {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Optional filter argument for list_all_classes; empty strings count as absent
fn filter_arg(arguments: &Value) -> Option<String> {
    match arguments.get("filter") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn remote_error(error: &Option<String>) -> Result<()> {
    match error {
        Some(message) => Err(DocsError::RemoteError(message.clone())),
        None => Ok(()),
    }
}

/// Handle a tools/call request.
///
/// Every failure — unknown tool, bridge rejection, timeout, remote error —
/// is converted into an error-flagged text result here; nothing propagates
/// to the MCP layer as a protocol error.
pub async fn handle_tool_call<C: EngineClient>(
    name: &str,
    arguments: Value,
    id: RequestId,
    client: &Arc<C>,
) -> Response {
    match invoke(name, &arguments, client).await {
        Ok(text) => Response::success(id, text_result(&text, false)),
        Err(e) => Response::success(id, text_result(&format!("Error: {}", e), true)),
    }
}

fn text_result(text: &str, is_error: bool) -> Value {
    if is_error {
        json!({ "content": [{ "type": "text", "text": text }], "isError": true })
    } else {
        json!({ "content": [{ "type": "text", "text": text }] })
    }
}

/// Dispatch one operation; the RPC method name equals the tool name
async fn invoke<C: EngineClient>(name: &str, arguments: &Value, client: &Arc<C>) -> Result<String> {
    match name {
        "get_class_doc" => {
            let class_name = coerce_arg(arguments, "class_name");
            let raw = client
                .call("get_class_doc", json!({ "class_name": class_name }))
                .await?;
            let doc: ClassDocReply = serde_json::from_value(raw)?;
            remote_error(&doc.error)?;
            Ok(format::class_doc(&doc))
        }
        "search_classes" => {
            let pattern = coerce_arg(arguments, "pattern");
            let raw = client
                .call("search_classes", json!({ "pattern": pattern }))
                .await?;
            let reply: SearchReply = serde_json::from_value(raw)?;
            remote_error(&reply.error)?;
            Ok(format::search_results(&pattern, &reply.results))
        }
        "get_class_methods" => {
            let class_name = coerce_arg(arguments, "class_name");
            let raw = client
                .call("get_class_methods", json!({ "class_name": class_name }))
                .await?;
            let reply: MethodsReply = serde_json::from_value(raw)?;
            remote_error(&reply.error)?;
            Ok(format::member_list(&reply.methods, "methods"))
        }
        "get_class_properties" => {
            let class_name = coerce_arg(arguments, "class_name");
            let raw = client
                .call("get_class_properties", json!({ "class_name": class_name }))
                .await?;
            let reply: PropertiesReply = serde_json::from_value(raw)?;
            remote_error(&reply.error)?;
            Ok(format::member_list(&reply.properties, "properties"))
        }
        "get_class_signals" => {
            let class_name = coerce_arg(arguments, "class_name");
            let raw = client
                .call("get_class_signals", json!({ "class_name": class_name }))
                .await?;
            let reply: SignalsReply = serde_json::from_value(raw)?;
            remote_error(&reply.error)?;
            Ok(format::member_list(&reply.signals, "signals"))
        }
        "get_class_hierarchy" => {
            let class_name = coerce_arg(arguments, "class_name");
            let raw = client
                .call("get_class_hierarchy", json!({ "class_name": class_name }))
                .await?;
            let reply: HierarchyReply = serde_json::from_value(raw)?;
            remote_error(&reply.error)?;
            Ok(format::hierarchy(&class_name, &reply.hierarchy))
        }
        "list_all_classes" => {
            // The filter is applied by the editor plugin, never locally.
            let filter = filter_arg(arguments);
            let params = match &filter {
                Some(f) => json!({ "filter": f }),
                None => json!({}),
            };
            let raw = client.call("list_all_classes", params).await?;
            let reply: ClassListReply = serde_json::from_value(raw)?;
            remote_error(&reply.error)?;
            Ok(format::class_list(filter.as_deref(), &reply.classes))
        }
        _ => Err(DocsError::UnknownTool(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    /// Records every call and answers each from a canned script.
    struct FakeClient {
        calls: Mutex<Vec<(String, Value)>>,
        reply: Value,
        connected: bool,
    }

    impl FakeClient {
        fn answering(reply: Value) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                reply,
                connected: true,
            })
        }

        fn disconnected() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                reply: Value::Null,
                connected: false,
            })
        }

        async fn calls(&self) -> Vec<(String, Value)> {
            self.calls.lock().await.clone()
        }
    }

    #[async_trait]
    impl EngineClient for FakeClient {
        async fn call(&self, method: &str, params: Value) -> Result<Value> {
            if !self.connected {
                return Err(DocsError::NotConnected);
            }
            self.calls
                .lock()
                .await
                .push((method.to_string(), params));
            Ok(self.reply.clone())
        }

        fn is_connected(&self) -> bool {
            self.connected
        }

        async fn shutdown(&self) {}
    }

    fn result_text(response: &Response) -> String {
        response.result.as_ref().unwrap()["content"][0]["text"]
            .as_str()
            .unwrap()
            .to_string()
    }

    fn is_error_flagged(response: &Response) -> bool {
        response.result.as_ref().unwrap()["isError"] == json!(true)
    }

    #[tokio::test]
    async fn test_every_tool_sends_one_rpc_with_matching_method() {
        let cases: Vec<(&str, Value, Value)> = vec![
            ("get_class_doc", json!({"class_name": "Node"}), json!({"name": "Node"})),
            ("search_classes", json!({"pattern": "Area"}), json!({"results": []})),
            ("get_class_methods", json!({"class_name": "Node"}), json!({"methods": []})),
            (
                "get_class_properties",
                json!({"class_name": "Node"}),
                json!({"properties": []}),
            ),
            ("get_class_signals", json!({"class_name": "Node"}), json!({"signals": []})),
            (
                "get_class_hierarchy",
                json!({"class_name": "Node"}),
                json!({"hierarchy": ["Node", "Object"]}),
            ),
            ("list_all_classes", json!({}), json!({"classes": []})),
        ];

        for (name, arguments, reply) in cases {
            let client = FakeClient::answering(reply);
            let response =
                handle_tool_call(name, arguments, RequestId::Number(1), &client).await;

            assert!(!is_error_flagged(&response), "{} errored", name);
            let calls = client.calls().await;
            assert_eq!(calls.len(), 1, "{} sent {} RPCs", name, calls.len());
            assert_eq!(calls[0].0, name);
        }
    }

    #[tokio::test]
    async fn test_disconnected_client_yields_error_result() {
        let client = FakeClient::disconnected();
        let response = handle_tool_call(
            "get_class_doc",
            json!({"class_name": "Node"}),
            RequestId::Number(1),
            &client,
        )
        .await;

        assert!(is_error_flagged(&response));
        assert!(result_text(&response).starts_with("Error: Not connected to Godot"));
        assert!(client.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let client = FakeClient::answering(Value::Null);
        let response =
            handle_tool_call("sim_step", json!({}), RequestId::Number(1), &client).await;

        assert!(is_error_flagged(&response));
        assert!(result_text(&response).contains("Unknown tool: sim_step"));
        assert!(client.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_class_doc_formatting() {
        let client = FakeClient::answering(json!({
            "name": "Node",
            "inherits": "Object",
            "properties": [1, 2],
            "methods": [1],
            "signals": []
        }));
        let response = handle_tool_call(
            "get_class_doc",
            json!({"class_name": "Node"}),
            RequestId::Number(1),
            &client,
        )
        .await;

        let text = result_text(&response);
        assert!(text.contains("# Node"));
        assert!(text.contains("**Inherits:** Object"));
        assert!(text.contains("This class has 2 properties."));
        assert!(!text.contains("## Signals"));
    }

    #[tokio::test]
    async fn test_search_output_exact() {
        let client = FakeClient::answering(json!({"results": ["Area2D", "Area3D"]}));
        let response = handle_tool_call(
            "search_classes",
            json!({"pattern": "Area"}),
            RequestId::Number(1),
            &client,
        )
        .await;

        assert_eq!(
            result_text(&response),
            "Found 2 classes matching 'Area':\n\nArea2D\nArea3D"
        );
    }

    #[tokio::test]
    async fn test_methods_numbered_with_raw_fallback() {
        let client = FakeClient::answering(json!({"methods": [{"name": "ready"}, "process"]}));
        let response = handle_tool_call(
            "get_class_methods",
            json!({"class_name": "Node"}),
            RequestId::Number(1),
            &client,
        )
        .await;

        assert_eq!(result_text(&response), "1. ready\n2. process\n");
    }

    #[tokio::test]
    async fn test_remote_error_field_is_flagged() {
        let client = FakeClient::answering(json!({"error": "Class not found: Nod"}));
        let response = handle_tool_call(
            "get_class_doc",
            json!({"class_name": "Nod"}),
            RequestId::Number(1),
            &client,
        )
        .await;

        assert!(is_error_flagged(&response));
        assert_eq!(result_text(&response), "Error: Class not found: Nod");
    }

    #[tokio::test]
    async fn test_missing_argument_coerces_to_undefined() {
        let client = FakeClient::answering(json!({"name": "undefined"}));
        handle_tool_call("get_class_doc", json!({}), RequestId::Number(1), &client).await;

        let calls = client.calls().await;
        assert_eq!(calls[0].1["class_name"], "undefined");
    }

    #[tokio::test]
    async fn test_list_all_classes_forwards_filter() {
        let client = FakeClient::answering(json!({"classes": ["Node2D"]}));
        let response = handle_tool_call(
            "list_all_classes",
            json!({"filter": "2D"}),
            RequestId::Number(1),
            &client,
        )
        .await;

        let calls = client.calls().await;
        assert_eq!(calls[0].1, json!({"filter": "2D"}));
        assert_eq!(
            result_text(&response),
            "Available Godot classes matching '2D' (1 total):\n\nNode2D"
        );
    }

    #[tokio::test]
    async fn test_list_all_classes_without_filter_sends_empty_params() {
        let client = FakeClient::answering(json!({"classes": []}));
        handle_tool_call("list_all_classes", json!({}), RequestId::Number(1), &client).await;

        let calls = client.calls().await;
        assert_eq!(calls[0].1, json!({}));
    }

    #[test]
    fn test_tool_list_is_the_fixed_set() {
        let names: Vec<String> = list_tools().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "get_class_doc",
                "search_classes",
                "get_class_methods",
                "get_class_properties",
                "get_class_signals",
                "get_class_hierarchy",
                "list_all_classes",
            ]
        );
    }
}
