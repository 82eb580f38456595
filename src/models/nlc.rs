//! Request payloads for the natural-language-classifier service

use serde::Serialize;
use serde_json::Value;

/// Body of a `classify` call
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyRequest {
    pub text: String,
}

/// Body of a `classify-collection` call
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyCollectionRequest {
    pub collection: Vec<Value>,
}
