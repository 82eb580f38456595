//! tts-v1 service catalog

use crate::commands::Handler;
use crate::registry::{CommonFlags, FlagKind, FlagSpec, OperationSpec, ReturnKind, ServiceSpec};

fn flag(name: &'static str, kind: FlagKind, help: &'static str) -> FlagSpec {
    FlagSpec::new(name, kind, help)
}

pub(super) fn service() -> ServiceSpec {
    ServiceSpec {
        id: "tts-v1",
        aliases: &["text-to-speech"],
        short_help: "Synthesize speech from text",
        long_help: Some(
            "Turn text into spoken audio with a choice of voices. Credentials \
             come from the TEXT_TO_SPEECH_* environment variables.",
        ),
        auth_key: "text_to_speech",
        default_url: "https://gateway.cirruscloud.net/text-to-speech/api",
        operations: vec![list_voices(), get_voice(), synthesize()],
    }
}

fn list_voices() -> OperationSpec {
    OperationSpec::new("list-voices", "List available voices", Handler::TtsListVoices)
        .common(CommonFlags::Output)
}

fn get_voice() -> OperationSpec {
    OperationSpec::new("get-voice", "Get one voice", Handler::TtsGetVoice)
        .flag(flag("voice", FlagKind::String, "Voice to fetch").required())
        .flag(flag(
            "customization_id",
            FlagKind::String,
            "Include information about this custom voice model",
        ))
        .common(CommonFlags::Output)
}

fn synthesize() -> OperationSpec {
    OperationSpec::new(
        "synthesize",
        "Synthesize text to an audio file",
        Handler::TtsSynthesize,
    )
    .flag(flag("text", FlagKind::String, "Text to synthesize").required())
    .flag(flag("voice", FlagKind::String, "Voice to speak with"))
    .flag(flag("accept", FlagKind::String, "Audio media type of the result"))
    .flag(flag(
        "customization_id",
        FlagKind::String,
        "Custom voice model to speak with",
    ))
    .common(CommonFlags::Output)
    .returns(ReturnKind::Binary)
}
