//! Text rendering of documentation replies

use godot_docs_core::{ClassDocReply, DocItem};

/// Summarize a class doc: title, inheritance line, member counts.
/// Empty member lists omit their section entirely.
pub fn class_doc(doc: &ClassDocReply) -> String {
    let mut out = format!("# {}\n\n", doc.name);

    if let Some(inherits) = doc.inherits.as_deref().filter(|s| !s.is_empty()) {
        out.push_str(&format!("**Inherits:** {}\n\n", inherits));
    }
    if !doc.properties.is_empty() {
        out.push_str(&format!(
            "## Properties\n\nThis class has {} properties.\n\n",
            doc.properties.len()
        ));
    }
    if !doc.methods.is_empty() {
        out.push_str(&format!(
            "## Methods\n\nThis class has {} methods.\n\n",
            doc.methods.len()
        ));
    }
    if !doc.signals.is_empty() {
        out.push_str(&format!(
            "## Signals\n\nThis class has {} signals.\n\n",
            doc.signals.len()
        ));
    }

    out
}

/// One-based numbered list of member labels; `kind` names the member type
/// in the empty-list message ("methods", "properties", "signals").
pub fn member_list(items: &[DocItem], kind: &str) -> String {
    if items.is_empty() {
        return format!("No {} found.", kind);
    }
    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", index + 1, item.label()));
    }
    out
}

pub fn search_results(pattern: &str, results: &[String]) -> String {
    format!(
        "Found {} classes matching '{}':\n\n{}",
        results.len(),
        pattern,
        results.join("\n")
    )
}

pub fn hierarchy(class_name: &str, chain: &[String]) -> String {
    format!(
        "Inheritance hierarchy for {}:\n\n{}",
        class_name,
        chain.join(" -> ")
    )
}

pub fn class_list(filter: Option<&str>, classes: &[String]) -> String {
    let scope = match filter {
        Some(f) => format!(" matching '{}'", f),
        None => String::new(),
    };
    format!(
        "Available Godot classes{} ({} total):\n\n{}",
        scope,
        classes.len(),
        classes.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_class_doc_sections() {
        let doc: ClassDocReply = serde_json::from_value(json!({
            "name": "Node",
            "inherits": "Object",
            "properties": [1, 2],
            "methods": [1],
            "signals": []
        }))
        .unwrap();

        let text = class_doc(&doc);
        assert!(text.contains("# Node"));
        assert!(text.contains("**Inherits:** Object"));
        assert!(text.contains("## Properties\n\nThis class has 2 properties."));
        assert!(text.contains("## Methods\n\nThis class has 1 methods."));
        assert!(!text.contains("## Signals"));
    }

    #[test]
    fn test_class_doc_root_class_has_no_inherits_line() {
        let doc: ClassDocReply =
            serde_json::from_value(json!({"name": "Object", "methods": [1, 2, 3]})).unwrap();
        let text = class_doc(&doc);
        assert!(text.starts_with("# Object\n\n"));
        assert!(!text.contains("**Inherits:**"));
    }

    #[test]
    fn test_search_results_exact() {
        let results = vec!["Area2D".to_string(), "Area3D".to_string()];
        assert_eq!(
            search_results("Area", &results),
            "Found 2 classes matching 'Area':\n\nArea2D\nArea3D"
        );
    }

    #[test]
    fn test_member_list_mixed_shapes() {
        let items: Vec<DocItem> =
            serde_json::from_value(json!([{"name": "ready"}, "process"])).unwrap();
        assert_eq!(member_list(&items, "methods"), "1. ready\n2. process\n");
    }

    #[test]
    fn test_member_list_empty() {
        assert_eq!(member_list(&[], "signals"), "No signals found.");
        assert_eq!(member_list(&[], "properties"), "No properties found.");
    }

    #[test]
    fn test_hierarchy_chain() {
        let chain = vec![
            "Area2D".to_string(),
            "CollisionObject2D".to_string(),
            "Node2D".to_string(),
        ];
        assert_eq!(
            hierarchy("Area2D", &chain),
            "Inheritance hierarchy for Area2D:\n\nArea2D -> CollisionObject2D -> Node2D"
        );
    }

    #[test]
    fn test_class_list_with_and_without_filter() {
        let classes = vec!["Node".to_string(), "Node2D".to_string()];
        assert_eq!(
            class_list(Some("Node"), &classes),
            "Available Godot classes matching 'Node' (2 total):\n\nNode\nNode2D"
        );
        assert_eq!(
            class_list(None, &classes),
            "Available Godot classes (2 total):\n\nNode\nNode2D"
        );
    }
}
