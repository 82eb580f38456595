//! Operation handlers
//!
//! Each operation follows the same skeleton: resolve any confirmation, build
//! the typed options payload from the bound flags, construct the transport
//! client, make the one remote call, and hand back an outcome matching the
//! operation's declared return kind. The payload-building step of every
//! handler is a pure function so the set-vs-unset behavior is testable
//! without a network.

pub mod assistant;
pub mod nlc;
pub mod nlu;
pub mod stt;
pub mod tts;
pub mod vr;

use crate::binder::BoundFlags;
use crate::context::InvocationContext;
use crate::error::{CliError, CliResult};

/// What a handler produced
#[derive(Debug)]
pub enum Outcome {
    /// A structured value for the renderer
    Value(serde_json::Value),
    /// Acknowledgement with no payload
    Ack,
    /// A downloaded byte stream
    Binary(Vec<u8>),
    /// The user declined a confirmation; nothing was sent
    Cancelled,
}

/// Handler reference stored in the registry, one per operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    AssistantMessage,
    AssistantListWorkspaces,
    AssistantGetWorkspace,
    AssistantCreateWorkspace,
    AssistantUpdateWorkspace,
    AssistantDeleteWorkspace,
    AssistantListIntents,
    AssistantCreateIntent,
    AssistantDeleteIntent,
    AssistantListLogs,
    NlcClassify,
    NlcClassifyCollection,
    NlcCreateClassifier,
    NlcListClassifiers,
    NlcGetClassifier,
    NlcDeleteClassifier,
    NluAnalyze,
    NluListModels,
    NluDeleteModel,
    SttListModels,
    SttGetModel,
    SttRecognize,
    SttCreateLanguageModel,
    SttListLanguageModels,
    SttGetLanguageModel,
    SttDeleteLanguageModel,
    SttTrainLanguageModel,
    SttAddCorpus,
    SttCreateClassifier,
    TtsListVoices,
    TtsGetVoice,
    TtsSynthesize,
    VrClassify,
    VrDetectFaces,
    VrCreateClassifier,
    VrListClassifiers,
    VrGetClassifier,
    VrUpdateClassifier,
    VrDeleteClassifier,
    VrGetCoreMlModel,
}

/// Run the handler for the matched operation
pub async fn run(handler: Handler, ctx: &mut InvocationContext) -> CliResult<Outcome> {
    match handler {
        Handler::AssistantMessage => assistant::message(ctx).await,
        Handler::AssistantListWorkspaces => assistant::list_workspaces(ctx).await,
        Handler::AssistantGetWorkspace => assistant::get_workspace(ctx).await,
        Handler::AssistantCreateWorkspace => assistant::create_workspace(ctx).await,
        Handler::AssistantUpdateWorkspace => assistant::update_workspace(ctx).await,
        Handler::AssistantDeleteWorkspace => assistant::delete_workspace(ctx).await,
        Handler::AssistantListIntents => assistant::list_intents(ctx).await,
        Handler::AssistantCreateIntent => assistant::create_intent(ctx).await,
        Handler::AssistantDeleteIntent => assistant::delete_intent(ctx).await,
        Handler::AssistantListLogs => assistant::list_logs(ctx).await,
        Handler::NlcClassify => nlc::classify(ctx).await,
        Handler::NlcClassifyCollection => nlc::classify_collection(ctx).await,
        Handler::NlcCreateClassifier => nlc::create_classifier(ctx).await,
        Handler::NlcListClassifiers => nlc::list_classifiers(ctx).await,
        Handler::NlcGetClassifier => nlc::get_classifier(ctx).await,
        Handler::NlcDeleteClassifier => nlc::delete_classifier(ctx).await,
        Handler::NluAnalyze => nlu::analyze(ctx).await,
        Handler::NluListModels => nlu::list_models(ctx).await,
        Handler::NluDeleteModel => nlu::delete_model(ctx).await,
        Handler::SttListModels => stt::list_models(ctx).await,
        Handler::SttGetModel => stt::get_model(ctx).await,
        Handler::SttRecognize => stt::recognize(ctx).await,
        Handler::SttCreateLanguageModel => stt::create_language_model(ctx).await,
        Handler::SttListLanguageModels => stt::list_language_models(ctx).await,
        Handler::SttGetLanguageModel => stt::get_language_model(ctx).await,
        Handler::SttDeleteLanguageModel => stt::delete_language_model(ctx).await,
        Handler::SttTrainLanguageModel => stt::train_language_model(ctx).await,
        Handler::SttAddCorpus => stt::add_corpus(ctx).await,
        Handler::SttCreateClassifier => stt::create_classifier(ctx).await,
        Handler::TtsListVoices => tts::list_voices(ctx).await,
        Handler::TtsGetVoice => tts::get_voice(ctx).await,
        Handler::TtsSynthesize => tts::synthesize(ctx).await,
        Handler::VrClassify => vr::classify(ctx).await,
        Handler::VrDetectFaces => vr::detect_faces(ctx).await,
        Handler::VrCreateClassifier => vr::create_classifier(ctx).await,
        Handler::VrListClassifiers => vr::list_classifiers(ctx).await,
        Handler::VrGetClassifier => vr::get_classifier(ctx).await,
        Handler::VrUpdateClassifier => vr::update_classifier(ctx).await,
        Handler::VrDeleteClassifier => vr::delete_classifier(ctx).await,
        Handler::VrGetCoreMlModel => vr::get_core_ml_model(ctx).await,
    }
}

/// Take a required string flag.
///
/// The parser enforces presence; this guards the handler against a registry
/// entry that forgot the `required` marker.
pub(crate) fn require_string(flags: &mut BoundFlags, name: &str) -> CliResult<String> {
    flags
        .take_string(name)
        .ok_or_else(|| CliError::Usage(format!("Missing required flag --{}", name)))
}

/// Take a required upload flag
pub(crate) fn require_upload(
    flags: &mut BoundFlags,
    name: &str,
) -> CliResult<crate::binder::FileUpload> {
    flags
        .take_upload(name)
        .ok_or_else(|| CliError::Usage(format!("Missing required flag --{}", name)))
}

/// Take a required keyed-upload flag
pub(crate) fn require_uploads(
    flags: &mut BoundFlags,
    name: &str,
) -> CliResult<Vec<(String, crate::binder::FileUpload)>> {
    flags
        .take_uploads(name)
        .ok_or_else(|| CliError::Usage(format!("Missing required flag --{}", name)))
}

/// Take a required JSON-array flag
pub(crate) fn require_json_array(
    flags: &mut BoundFlags,
    name: &str,
) -> CliResult<Vec<serde_json::Value>> {
    flags
        .take_json_array(name)
        .ok_or_else(|| CliError::Usage(format!("Missing required flag --{}", name)))
}
