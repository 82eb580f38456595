//! Request payloads for the assistant service

use serde::Serialize;
use serde_json::Value;

/// Body of a `message` call
#[derive(Debug, Clone, Default, Serialize)]
pub struct MessageOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes_visited_details: Option<bool>,
}

/// Query options for `list-workspaces`
#[derive(Debug, Clone, Default)]
pub struct ListWorkspacesOptions {
    pub page_limit: Option<i64>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
}

/// Query options for `get-workspace`
#[derive(Debug, Clone, Default)]
pub struct GetWorkspaceOptions {
    pub export: Option<bool>,
    pub include_audit: Option<bool>,
    pub sort: Option<String>,
}

/// Body of a `create-workspace` call
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateWorkspaceOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_opt_out: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_nodes: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterexamples: Option<Vec<Value>>,
}

/// Body of an `update-workspace` call; `append` travels as a query parameter
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateWorkspaceOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Query options for `list-intents`
#[derive(Debug, Clone, Default)]
pub struct ListIntentsOptions {
    pub export: Option<bool>,
    pub page_limit: Option<i64>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
}

/// Body of a `create-intent` call
#[derive(Debug, Clone, Serialize)]
pub struct CreateIntentRequest {
    pub intent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Value>>,
}

/// Query options for `list-logs`
#[derive(Debug, Clone, Default)]
pub struct ListLogsOptions {
    pub sort: Option<String>,
    pub filter: Option<String>,
    pub page_limit: Option<i64>,
    pub cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_message_fields_are_omitted() {
        let options = MessageOptions {
            alternate_intents: Some(false),
            ..Default::default()
        };
        let body = serde_json::to_value(&options).unwrap();
        assert_eq!(body, serde_json::json!({"alternate_intents": false}));
    }

    #[test]
    fn test_empty_message_serializes_to_empty_object() {
        let body = serde_json::to_value(MessageOptions::default()).unwrap();
        assert_eq!(body, serde_json::json!({}));
    }

    #[test]
    fn test_create_intent_keeps_required_field() {
        let request = CreateIntentRequest {
            intent: "greeting".to_string(),
            description: None,
            examples: None,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, serde_json::json!({"intent": "greeting"}));
    }
}
