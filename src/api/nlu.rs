//! Natural-language-understanding transport methods

use serde_json::Value;

use crate::api::{Query, ServiceClient};
use crate::error::CliResult;
use crate::models::nlu::AnalyzeOptions;

impl ServiceClient {
    /// Analyze text, HTML, or a public web page
    pub async fn analyze(&self, options: &AnalyzeOptions) -> CliResult<Value> {
        self.post_json("/v1/analyze", Query::new(), options).await
    }

    /// List custom models
    pub async fn list_models(&self) -> CliResult<Value> {
        self.get_json("/v1/models", Query::new()).await
    }

    /// Delete a custom model; the service echoes the deleted model
    pub async fn delete_model(&self, model_id: &str) -> CliResult<Value> {
        let path = format!("/v1/models/{}", model_id);
        self.delete_json(&path, Query::new()).await
    }
}
