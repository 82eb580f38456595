//! Speech-to-text transport methods

use serde_json::Value;

use crate::api::{push_list, push_opt, upload_part, Query, ServiceClient};
use crate::binder::FileUpload;
use crate::error::CliResult;
use crate::models::stt::{CreateLanguageModelRequest, RecognizeOptions};

/// Content type assumed when the caller does not name one
const DEFAULT_AUDIO_TYPE: &str = "application/octet-stream";

impl ServiceClient {
    /// List base speech models
    pub async fn list_speech_models(&self) -> CliResult<Value> {
        self.get_json("/v1/models", Query::new()).await
    }

    /// Get one base speech model
    pub async fn get_speech_model(&self, model_id: &str) -> CliResult<Value> {
        let path = format!("/v1/models/{}", model_id);
        self.get_json(&path, Query::new()).await
    }

    /// Transcribe an audio file
    pub async fn recognize(
        &self,
        audio: FileUpload,
        content_type: Option<&str>,
        options: &RecognizeOptions,
    ) -> CliResult<Value> {
        let mut query = Query::new();
        push_opt(&mut query, "model", options.model.as_ref());
        push_opt(
            &mut query,
            "language_customization_id",
            options.language_customization_id.as_ref(),
        );
        push_opt(
            &mut query,
            "acoustic_customization_id",
            options.acoustic_customization_id.as_ref(),
        );
        push_list(&mut query, "keywords", options.keywords.as_deref());
        push_opt(&mut query, "keywords_threshold", options.keywords_threshold);
        push_opt(&mut query, "max_alternatives", options.max_alternatives);
        push_opt(
            &mut query,
            "word_alternatives_threshold",
            options.word_alternatives_threshold,
        );
        push_opt(&mut query, "word_confidence", options.word_confidence);
        push_opt(&mut query, "timestamps", options.timestamps);
        push_opt(&mut query, "profanity_filter", options.profanity_filter);
        push_opt(&mut query, "smart_formatting", options.smart_formatting);
        push_opt(&mut query, "speaker_labels", options.speaker_labels);

        self.post_body(
            "/v1/recognize",
            query,
            content_type.unwrap_or(DEFAULT_AUDIO_TYPE),
            audio.data,
        )
        .await
    }

    /// Create a custom language model
    pub async fn create_language_model(
        &self,
        request: &CreateLanguageModelRequest,
    ) -> CliResult<Value> {
        self.post_json("/v1/customizations", Query::new(), request)
            .await
    }

    /// List custom language models
    pub async fn list_language_models(&self, language: Option<&str>) -> CliResult<Value> {
        let mut query = Query::new();
        push_opt(&mut query, "language", language);
        self.get_json("/v1/customizations", query).await
    }

    /// Get one custom language model
    pub async fn get_language_model(&self, customization_id: &str) -> CliResult<Value> {
        let path = format!("/v1/customizations/{}", customization_id);
        self.get_json(&path, Query::new()).await
    }

    /// Delete a custom language model
    pub async fn delete_language_model(&self, customization_id: &str) -> CliResult<()> {
        let path = format!("/v1/customizations/{}", customization_id);
        self.delete(&path, Query::new()).await
    }

    /// Start training a custom language model
    pub async fn train_language_model(
        &self,
        customization_id: &str,
        word_type_to_add: Option<&str>,
    ) -> CliResult<()> {
        let mut query = Query::new();
        push_opt(&mut query, "word_type_to_add", word_type_to_add);
        let path = format!("/v1/customizations/{}/train", customization_id);
        self.post_ack(&path, query).await
    }

    /// Add a corpus file to a custom language model
    pub async fn add_corpus(
        &self,
        customization_id: &str,
        corpus_name: &str,
        corpus_file: FileUpload,
        allow_overwrite: Option<bool>,
    ) -> CliResult<()> {
        let mut query = Query::new();
        push_opt(&mut query, "allow_overwrite", allow_overwrite);
        let path = format!(
            "/v1/customizations/{}/corpora/{}",
            customization_id, corpus_name
        );
        self.post_body_ack(&path, query, "text/plain", corpus_file.data)
            .await
    }

    /// Train an audio classifier from keyed example archives
    pub async fn create_audio_classifier(
        &self,
        name: Option<&str>,
        positive_examples: Vec<(String, FileUpload)>,
        negative_examples: Option<FileUpload>,
    ) -> CliResult<Value> {
        let mut form = reqwest::multipart::Form::new();
        if let Some(name) = name {
            form = form.text("name", name.to_string());
        }
        for (key, upload) in positive_examples {
            form = form.part(format!("{}_positive_examples", key), upload_part(upload));
        }
        if let Some(upload) = negative_examples {
            form = form.part("negative_examples", upload_part(upload));
        }
        self.post_multipart("/v1/classifiers", Query::new(), form)
            .await
    }
}
