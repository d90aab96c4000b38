//! Canned prompt templates

use godot_docs_core::{DocsError, Result};
use serde::Serialize;
use serde_json::{Value, json};

/// Prompt definition for MCP prompts/list
#[derive(Debug, Clone, Serialize)]
pub struct PromptDef {
    pub name: String,
    pub description: String,
}

/// Get list of available prompts
pub fn list_prompts() -> Vec<PromptDef> {
    vec![
        PromptDef {
            name: "explain_class".into(),
            description: "Get a detailed explanation of a Godot class".into(),
        },
        PromptDef {
            name: "compare_classes".into(),
            description: "Compare two Godot classes".into(),
        },
    ]
}

fn str_arg<'a>(arguments: &'a Value, key: &str, default: &'a str) -> &'a str {
    arguments.get(key).and_then(Value::as_str).unwrap_or(default)
}

/// Build the messages for a named prompt.
///
/// Unlike tool calls, an unknown prompt name surfaces as a JSON-RPC error
/// rather than an error-flagged result.
pub fn get_prompt(name: &str, arguments: &Value) -> Result<Value> {
    match name {
        "explain_class" => {
            let class_name = str_arg(arguments, "class_name", "Node");
            Ok(user_message(format!(
                "Please provide a comprehensive explanation of the Godot class '{}', \
                 including its purpose, key methods, properties, and common use cases.",
                class_name
            )))
        }
        "compare_classes" => {
            let class1 = str_arg(arguments, "class1", "Node");
            let class2 = str_arg(arguments, "class2", "Control");
            Ok(user_message(format!(
                "Please compare the Godot classes '{}' and '{}', highlighting their \
                 differences, when to use each, and their relationship.",
                class1, class2
            )))
        }
        _ => Err(DocsError::UnknownPrompt(name.to_string())),
    }
}

fn user_message(text: String) -> Value {
    json!({
        "messages": [
            {
                "role": "user",
                "content": { "type": "text", "text": text }
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_class_interpolates_name() {
        let result = get_prompt("explain_class", &json!({"class_name": "Area2D"})).unwrap();
        let text = result["messages"][0]["content"]["text"].as_str().unwrap();
        assert!(text.contains("'Area2D'"));
    }

    #[test]
    fn test_defaults_when_arguments_omitted() {
        let result = get_prompt("explain_class", &json!({})).unwrap();
        let text = result["messages"][0]["content"]["text"].as_str().unwrap();
        assert!(text.contains("'Node'"));

        let result = get_prompt("compare_classes", &json!({})).unwrap();
        let text = result["messages"][0]["content"]["text"].as_str().unwrap();
        assert!(text.contains("'Node'"));
        assert!(text.contains("'Control'"));
    }

    #[test]
    fn test_unknown_prompt_is_an_error() {
        let err = get_prompt("summarize_scene", &json!({})).unwrap_err();
        assert!(matches!(err, DocsError::UnknownPrompt(_)));
        assert_eq!(err.to_string(), "Unknown prompt: summarize_scene");
    }

    #[test]
    fn test_prompt_list() {
        let names: Vec<String> = list_prompts().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["explain_class", "compare_classes"]);
    }
}
