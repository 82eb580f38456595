//! Request payloads for the text-to-speech service

use serde::Serialize;

/// Body of a `synthesize` call; voice and customization travel as query
/// parameters, the accept format as a header
#[derive(Debug, Clone, Serialize)]
pub struct SynthesizeRequest {
    pub text: String,
}

/// Non-body options for `synthesize`
#[derive(Debug, Clone, Default)]
pub struct SynthesizeOptions {
    pub voice: Option<String>,
    pub accept: Option<String>,
    pub customization_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_request_shape() {
        let request = SynthesizeRequest {
            text: "hello".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"text": "hello"})
        );
    }
}
