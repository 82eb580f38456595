//! stt-v1 service catalog

use crate::commands::Handler;
use crate::registry::{CommonFlags, FlagKind, FlagSpec, OperationSpec, ReturnKind, ServiceSpec};

fn flag(name: &'static str, kind: FlagKind, help: &'static str) -> FlagSpec {
    FlagSpec::new(name, kind, help)
}

pub(super) fn service() -> ServiceSpec {
    ServiceSpec {
        id: "stt-v1",
        aliases: &["speech-to-text"],
        short_help: "Transcribe audio and manage custom speech models",
        long_help: Some(
            "Transcribe audio files and train custom language models and \
             audio classifiers. Credentials come from the SPEECH_TO_TEXT_* \
             environment variables.",
        ),
        auth_key: "speech_to_text",
        default_url: "https://gateway.cirruscloud.net/speech-to-text/api",
        operations: vec![
            list_models(),
            get_model(),
            recognize(),
            create_language_model(),
            list_language_models(),
            get_language_model(),
            delete_language_model(),
            train_language_model(),
            add_corpus(),
            create_classifier(),
        ],
    }
}

fn list_models() -> OperationSpec {
    OperationSpec::new("list-models", "List base speech models", Handler::SttListModels)
        .common(CommonFlags::Output)
}

fn get_model() -> OperationSpec {
    OperationSpec::new("get-model", "Get a base speech model", Handler::SttGetModel)
        .flag(flag("model_id", FlagKind::String, "Model to fetch").required())
        .common(CommonFlags::Output)
}

fn recognize() -> OperationSpec {
    OperationSpec::new("recognize", "Transcribe an audio file", Handler::SttRecognize)
        .flag(flag("audio", FlagKind::FilePath, "Audio file to transcribe").required())
        .flag(flag("content_type", FlagKind::String, "Audio media type of the file"))
        .flag(flag("model", FlagKind::String, "Base model to transcribe with"))
        .flag(flag(
            "language_customization_id",
            FlagKind::String,
            "Custom language model to apply",
        ))
        .flag(flag(
            "acoustic_customization_id",
            FlagKind::String,
            "Custom acoustic model to apply",
        ))
        .flag(flag("keywords", FlagKind::StringList, "Keywords to spot in the audio"))
        .flag(flag(
            "keywords_threshold",
            FlagKind::Float,
            "Minimum confidence for a keyword match",
        ))
        .flag(flag("max_alternatives", FlagKind::Int, "Maximum alternative transcripts"))
        .flag(flag(
            "word_alternatives_threshold",
            FlagKind::Float,
            "Minimum confidence for word alternatives",
        ))
        .flag(flag("word_confidence", FlagKind::Bool, "Include per-word confidence"))
        .flag(flag("timestamps", FlagKind::Bool, "Include per-word timestamps"))
        .flag(flag("profanity_filter", FlagKind::Bool, "Censor profanity in transcripts"))
        .flag(flag("smart_formatting", FlagKind::Bool, "Format dates, times, and numbers"))
        .flag(flag("speaker_labels", FlagKind::Bool, "Label the speaker of each word"))
        .common(CommonFlags::Output)
}

fn create_language_model() -> OperationSpec {
    OperationSpec::new(
        "create-language-model",
        "Create a custom language model",
        Handler::SttCreateLanguageModel,
    )
    .flag(flag("name", FlagKind::String, "Name of the new model").required())
    .flag(flag("base_model_name", FlagKind::String, "Base model to customize").required())
    .flag(flag("dialect", FlagKind::String, "Dialect of the base model"))
    .flag(flag("description", FlagKind::String, "Model description"))
    .common(CommonFlags::Output)
}

fn list_language_models() -> OperationSpec {
    OperationSpec::new(
        "list-language-models",
        "List custom language models",
        Handler::SttListLanguageModels,
    )
    .flag(flag("language", FlagKind::String, "Only models for this language"))
    .common(CommonFlags::Output)
}

fn get_language_model() -> OperationSpec {
    OperationSpec::new(
        "get-language-model",
        "Get a custom language model",
        Handler::SttGetLanguageModel,
    )
    .flag(flag("customization_id", FlagKind::String, "Model to fetch").required())
    .common(CommonFlags::Output)
}

fn delete_language_model() -> OperationSpec {
    OperationSpec::new(
        "delete-language-model",
        "Delete a custom language model",
        Handler::SttDeleteLanguageModel,
    )
    .flag(flag("customization_id", FlagKind::String, "Model to delete").required())
    .flag(flag("force", FlagKind::Bool, "Skip the confirmation prompt").short('f'))
    .common(CommonFlags::Output)
    .returns(ReturnKind::Ack)
}

fn train_language_model() -> OperationSpec {
    OperationSpec::new(
        "train-language-model",
        "Start training a custom language model",
        Handler::SttTrainLanguageModel,
    )
    .flag(flag("customization_id", FlagKind::String, "Model to train").required())
    .flag(flag(
        "word_type_to_add",
        FlagKind::String,
        "Word types added during training (all or user)",
    ))
    .common(CommonFlags::Output)
    .returns(ReturnKind::Ack)
}

fn add_corpus() -> OperationSpec {
    OperationSpec::new(
        "add-corpus",
        "Add a corpus file to a custom language model",
        Handler::SttAddCorpus,
    )
    .flag(flag("customization_id", FlagKind::String, "Model to extend").required())
    .flag(flag("corpus_name", FlagKind::String, "Name for the new corpus").required())
    .flag(flag("corpus_file", FlagKind::FilePath, "Plain-text corpus file").required())
    .flag(flag("allow_overwrite", FlagKind::Bool, "Replace a corpus with the same name"))
    .common(CommonFlags::Output)
    .returns(ReturnKind::Ack)
}

fn create_classifier() -> OperationSpec {
    OperationSpec::new(
        "create-classifier",
        "Train an audio classifier from example archives",
        Handler::SttCreateClassifier,
    )
    .flag(flag("name", FlagKind::String, "Name of the new classifier"))
    .flag(
        flag(
            "positive_examples",
            FlagKind::KeyedUpload,
            "JSON object mapping class names to example archive paths",
        )
        .required(),
    )
    .flag(flag(
        "negative_examples",
        FlagKind::FilePath,
        "Archive of examples matching no class",
    ))
    .common(CommonFlags::Output)
}
