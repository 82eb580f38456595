//! Request payloads for the speech-to-text service

use serde::Serialize;

/// Recognition options; all travel as query parameters alongside the raw
/// audio body
#[derive(Debug, Clone, Default)]
pub struct RecognizeOptions {
    pub model: Option<String>,
    pub language_customization_id: Option<String>,
    pub acoustic_customization_id: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub keywords_threshold: Option<f64>,
    pub max_alternatives: Option<i64>,
    pub word_alternatives_threshold: Option<f64>,
    pub word_confidence: Option<bool>,
    pub timestamps: Option<bool>,
    pub profanity_filter: Option<bool>,
    pub smart_formatting: Option<bool>,
    pub speaker_labels: Option<bool>,
}

/// Body of a `create-language-model` call
#[derive(Debug, Clone, Serialize)]
pub struct CreateLanguageModelRequest {
    pub name: String,
    pub base_model_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
