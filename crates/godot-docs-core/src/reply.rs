//! Typed reply models for the documentation RPCs
//!
//! The editor plugin answers each RPC with a JSON object. Rather than
//! formatting untyped JSON, each operation deserializes into one of these
//! structs so the formatters are total over explicit optional fields.
//! Every reply may carry an application-level `error` string instead of
//! its payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reply to `get_class_doc`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassDocReply {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub inherits: Option<String>,
    #[serde(default)]
    pub properties: Vec<Value>,
    #[serde(default)]
    pub methods: Vec<Value>,
    #[serde(default)]
    pub signals: Vec<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Reply to `search_classes`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchReply {
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Reply to `get_class_methods`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MethodsReply {
    #[serde(default)]
    pub methods: Vec<DocItem>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Reply to `get_class_properties`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertiesReply {
    #[serde(default)]
    pub properties: Vec<DocItem>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Reply to `get_class_signals`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignalsReply {
    #[serde(default)]
    pub signals: Vec<DocItem>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Reply to `get_class_hierarchy`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HierarchyReply {
    #[serde(default)]
    pub hierarchy: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Reply to `list_all_classes`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassListReply {
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One entry in a member list reply.
///
/// The plugin usually sends `{"name": "..."}` objects but older versions
/// send bare strings; anything else renders as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocItem {
    Named { name: String },
    Raw(Value),
}

impl DocItem {
    /// Display label for a numbered list
    pub fn label(&self) -> String {
        match self {
            DocItem::Named { name } => name.clone(),
            DocItem::Raw(Value::String(s)) => s.clone(),
            DocItem::Raw(other) => other.to_string(),
        }
    }
}
