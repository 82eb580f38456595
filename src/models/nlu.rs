//! Request payloads for the natural-language-understanding service

use serde::Serialize;
use serde_json::Value;

/// Body of an `analyze` call.
///
/// `features` is required by the operation but modeled as an option like the
/// rest: the flag binder only ever assigns fields the user supplied, and the
/// parser enforces presence before the payload is built.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalyzeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_to_raw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_analyzed_text: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_text_characters: Option<i64>,
}
