//! nlc-v1 service catalog

use crate::commands::Handler;
use crate::registry::{CommonFlags, FlagKind, FlagSpec, OperationSpec, ReturnKind, ServiceSpec};

fn flag(name: &'static str, kind: FlagKind, help: &'static str) -> FlagSpec {
    FlagSpec::new(name, kind, help)
}

pub(super) fn service() -> ServiceSpec {
    ServiceSpec {
        id: "nlc-v1",
        aliases: &["natural-language-classifier"],
        short_help: "Train and query natural-language classifiers",
        long_help: Some(
            "Classify short text phrases against trained classifiers. \
             Credentials come from the NATURAL_LANGUAGE_CLASSIFIER_* \
             environment variables.",
        ),
        auth_key: "natural_language_classifier",
        default_url: "https://gateway.cirruscloud.net/natural-language-classifier/api",
        operations: vec![
            classify(),
            classify_collection(),
            create_classifier(),
            list_classifiers(),
            get_classifier(),
            delete_classifier(),
        ],
    }
}

fn classify() -> OperationSpec {
    OperationSpec::new(
        "classify",
        "Classify a phrase",
        Handler::NlcClassify,
    )
    .flag(flag("classifier_id", FlagKind::String, "Classifier to query").required())
    .flag(flag("text", FlagKind::String, "Phrase to classify").required())
    .common(CommonFlags::Output)
}

fn classify_collection() -> OperationSpec {
    OperationSpec::new(
        "classify-collection",
        "Classify multiple phrases in one call",
        Handler::NlcClassifyCollection,
    )
    .flag(flag("classifier_id", FlagKind::String, "Classifier to query").required())
    .flag(
        flag(
            "collection",
            FlagKind::JsonArray,
            "Phrases as a JSON array of {\"text\": ...} objects",
        )
        .required(),
    )
    .common(CommonFlags::Output)
}

fn create_classifier() -> OperationSpec {
    OperationSpec::new(
        "create-classifier",
        "Train a new classifier",
        Handler::NlcCreateClassifier,
    )
    .flag(
        flag(
            "training_metadata",
            FlagKind::FilePath,
            "JSON file naming the language and classifier",
        )
        .required(),
    )
    .flag(
        flag(
            "training_data",
            FlagKind::FilePath,
            "CSV file of phrase,class training rows",
        )
        .required(),
    )
    .common(CommonFlags::Output)
}

fn list_classifiers() -> OperationSpec {
    OperationSpec::new(
        "list-classifiers",
        "List trained classifiers",
        Handler::NlcListClassifiers,
    )
    .common(CommonFlags::Output)
}

fn get_classifier() -> OperationSpec {
    OperationSpec::new(
        "get-classifier",
        "Get status of a classifier",
        Handler::NlcGetClassifier,
    )
    .flag(flag("classifier_id", FlagKind::String, "Classifier to inspect").required())
    .common(CommonFlags::Output)
}

fn delete_classifier() -> OperationSpec {
    OperationSpec::new(
        "delete-classifier",
        "Delete a classifier",
        Handler::NlcDeleteClassifier,
    )
    .flag(flag("classifier_id", FlagKind::String, "Classifier to delete").required())
    .flag(flag("force", FlagKind::Bool, "Skip the confirmation prompt").short('f'))
    .common(CommonFlags::Output)
    .returns(ReturnKind::Ack)
}
