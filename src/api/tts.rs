//! Text-to-speech transport methods

use serde_json::Value;

use crate::api::{push_opt, Query, ServiceClient};
use crate::error::CliResult;
use crate::models::tts::{SynthesizeOptions, SynthesizeRequest};

impl ServiceClient {
    /// List available voices
    pub async fn list_voices(&self) -> CliResult<Value> {
        self.get_json("/v1/voices", Query::new()).await
    }

    /// Get one voice
    pub async fn get_voice(&self, voice: &str, customization_id: Option<&str>) -> CliResult<Value> {
        let mut query = Query::new();
        push_opt(&mut query, "customization_id", customization_id);
        let path = format!("/v1/voices/{}", voice);
        self.get_json(&path, query).await
    }

    /// Synthesize text to an audio stream
    pub async fn synthesize(
        &self,
        request: &SynthesizeRequest,
        options: &SynthesizeOptions,
    ) -> CliResult<Vec<u8>> {
        let mut query = Query::new();
        push_opt(&mut query, "voice", options.voice.as_ref());
        push_opt(
            &mut query,
            "customization_id",
            options.customization_id.as_ref(),
        );
        self.post_json_bytes("/v1/synthesize", query, options.accept.as_deref(), request)
            .await
    }
}
