//! nlu-v1 service catalog

use crate::commands::Handler;
use crate::registry::{CommonFlags, FlagKind, FlagSpec, OperationSpec, ServiceSpec};

fn flag(name: &'static str, kind: FlagKind, help: &'static str) -> FlagSpec {
    FlagSpec::new(name, kind, help)
}

fn versioned(op: OperationSpec) -> OperationSpec {
    op.common(CommonFlags::VersionedOutput).version_required()
}

pub(super) fn service() -> ServiceSpec {
    ServiceSpec {
        id: "nlu-v1",
        aliases: &["natural-language-understanding"],
        short_help: "Analyze text for entities, keywords, sentiment, and more",
        long_help: Some(
            "Extract semantic features from text, HTML, or public web pages. \
             Credentials come from the NATURAL_LANGUAGE_UNDERSTANDING_* \
             environment variables.",
        ),
        auth_key: "natural_language_understanding",
        default_url: "https://gateway.cirruscloud.net/natural-language-understanding/api",
        operations: vec![analyze(), list_models(), delete_model()],
    }
}

fn analyze() -> OperationSpec {
    versioned(
        OperationSpec::new(
            "analyze",
            "Analyze text, HTML, or a public web page",
            Handler::NluAnalyze,
        )
        .flag(
            flag(
                "features",
                FlagKind::JsonObject,
                "Analysis features to apply, as a JSON object",
            )
            .required(),
        )
        .flag(flag("text", FlagKind::String, "Plain text to analyze"))
        .flag(flag("html", FlagKind::String, "HTML to analyze"))
        .flag(flag("url", FlagKind::String, "Public web page to analyze"))
        .flag(flag("clean", FlagKind::Bool, "Remove ads and navigation before analysis"))
        .flag(flag("xpath", FlagKind::String, "XPath query applied before analysis"))
        .flag(flag("fallback_to_raw", FlagKind::Bool, "Use raw HTML when cleaning fails"))
        .flag(flag("return_analyzed_text", FlagKind::Bool, "Echo the analyzed text"))
        .flag(flag("language", FlagKind::String, "ISO 639-1 language override"))
        .flag(flag(
            "limit_text_characters",
            FlagKind::Int,
            "Truncate the input to this many characters",
        )),
    )
}

fn list_models() -> OperationSpec {
    versioned(OperationSpec::new(
        "list-models",
        "List custom models",
        Handler::NluListModels,
    ))
}

fn delete_model() -> OperationSpec {
    // The service echoes the deleted model id, so this delete is declared
    // value-returning and renders that payload rather than an OK marker.
    versioned(
        OperationSpec::new(
            "delete-model",
            "Delete a custom model",
            Handler::NluDeleteModel,
        )
        .flag(flag("model_id", FlagKind::String, "Model to delete").required()),
    )
}
