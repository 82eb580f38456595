//! Natural-language-classifier transport methods

use serde_json::Value;

use crate::api::{upload_part, Query, ServiceClient};
use crate::binder::FileUpload;
use crate::error::CliResult;
use crate::models::nlc::{ClassifyCollectionRequest, ClassifyRequest};

impl ServiceClient {
    /// Classify a single phrase
    pub async fn classify(&self, classifier_id: &str, request: &ClassifyRequest) -> CliResult<Value> {
        let path = format!("/v1/classifiers/{}/classify", classifier_id);
        self.post_json(&path, Query::new(), request).await
    }

    /// Classify a collection of phrases in one call
    pub async fn classify_collection(
        &self,
        classifier_id: &str,
        request: &ClassifyCollectionRequest,
    ) -> CliResult<Value> {
        let path = format!("/v1/classifiers/{}/classify_collection", classifier_id);
        self.post_json(&path, Query::new(), request).await
    }

    /// Train a new classifier from metadata and training data files
    pub async fn create_text_classifier(
        &self,
        training_metadata: FileUpload,
        training_data: FileUpload,
    ) -> CliResult<Value> {
        let form = reqwest::multipart::Form::new()
            .part("training_metadata", upload_part(training_metadata))
            .part("training_data", upload_part(training_data));
        self.post_multipart("/v1/classifiers", Query::new(), form).await
    }

    /// List classifiers
    pub async fn list_text_classifiers(&self) -> CliResult<Value> {
        self.get_json("/v1/classifiers", Query::new()).await
    }

    /// Get classifier status
    pub async fn get_text_classifier(&self, classifier_id: &str) -> CliResult<Value> {
        let path = format!("/v1/classifiers/{}", classifier_id);
        self.get_json(&path, Query::new()).await
    }

    /// Delete a classifier
    pub async fn delete_text_classifier(&self, classifier_id: &str) -> CliResult<()> {
        let path = format!("/v1/classifiers/{}", classifier_id);
        self.delete(&path, Query::new()).await
    }
}
