//! Visual-recognition transport methods

use serde_json::Value;

use crate::api::{push_list, push_opt, upload_part, Query, ServiceClient};
use crate::binder::FileUpload;
use crate::error::CliResult;
use crate::models::vr::ClassifyOptions;

impl ServiceClient {
    /// Classify images from an upload or a URL
    pub async fn classify_images(
        &self,
        images_file: Option<FileUpload>,
        options: &ClassifyOptions,
    ) -> CliResult<Value> {
        let mut query = Query::new();
        push_opt(&mut query, "url", options.url.as_ref());
        push_opt(&mut query, "threshold", options.threshold);
        push_list(&mut query, "owners", options.owners.as_deref());
        push_list(&mut query, "classifier_ids", options.classifier_ids.as_deref());
        push_opt(&mut query, "accept_language", options.accept_language.as_ref());

        match images_file {
            Some(upload) => {
                let form =
                    reqwest::multipart::Form::new().part("images_file", upload_part(upload));
                self.post_multipart("/v3/classify", query, form).await
            }
            None => self.get_json("/v3/classify", query).await,
        }
    }

    /// Detect faces in images from an upload or a URL
    pub async fn detect_faces(
        &self,
        images_file: Option<FileUpload>,
        url: Option<&str>,
    ) -> CliResult<Value> {
        let mut query = Query::new();
        push_opt(&mut query, "url", url);

        match images_file {
            Some(upload) => {
                let form =
                    reqwest::multipart::Form::new().part("images_file", upload_part(upload));
                self.post_multipart("/v3/detect_faces", query, form).await
            }
            None => self.get_json("/v3/detect_faces", query).await,
        }
    }

    /// Train a new image classifier from keyed example archives
    pub async fn create_image_classifier(
        &self,
        name: &str,
        positive_examples: Vec<(String, FileUpload)>,
        negative_examples: Option<FileUpload>,
    ) -> CliResult<Value> {
        let mut form = reqwest::multipart::Form::new().text("name", name.to_string());
        for (key, upload) in positive_examples {
            form = form.part(format!("{}_positive_examples", key), upload_part(upload));
        }
        if let Some(upload) = negative_examples {
            form = form.part("negative_examples", upload_part(upload));
        }
        self.post_multipart("/v3/classifiers", Query::new(), form)
            .await
    }

    /// List image classifiers
    pub async fn list_image_classifiers(&self, verbose: Option<bool>) -> CliResult<Value> {
        let mut query = Query::new();
        push_opt(&mut query, "verbose", verbose);
        self.get_json("/v3/classifiers", query).await
    }

    /// Get one image classifier
    pub async fn get_image_classifier(&self, classifier_id: &str) -> CliResult<Value> {
        let path = format!("/v3/classifiers/{}", classifier_id);
        self.get_json(&path, Query::new()).await
    }

    /// Retrain an image classifier with new examples
    pub async fn update_image_classifier(
        &self,
        classifier_id: &str,
        positive_examples: Vec<(String, FileUpload)>,
        negative_examples: Option<FileUpload>,
    ) -> CliResult<Value> {
        let mut form = reqwest::multipart::Form::new();
        for (key, upload) in positive_examples {
            form = form.part(format!("{}_positive_examples", key), upload_part(upload));
        }
        if let Some(upload) = negative_examples {
            form = form.part("negative_examples", upload_part(upload));
        }
        let path = format!("/v3/classifiers/{}", classifier_id);
        self.post_multipart(&path, Query::new(), form).await
    }

    /// Delete an image classifier
    pub async fn delete_image_classifier(&self, classifier_id: &str) -> CliResult<()> {
        let path = format!("/v3/classifiers/{}", classifier_id);
        self.delete(&path, Query::new()).await
    }

    /// Download the Core ML model of a classifier
    pub async fn get_core_ml_model(&self, classifier_id: &str) -> CliResult<Vec<u8>> {
        let path = format!("/v3/classifiers/{}/core_ml_model", classifier_id);
        self.get_bytes(&path, Query::new()).await
    }
}
