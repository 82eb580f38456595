//! vr-v3 service catalog

use crate::commands::Handler;
use crate::registry::{CommonFlags, FlagKind, FlagSpec, OperationSpec, ReturnKind, ServiceSpec};

fn flag(name: &'static str, kind: FlagKind, help: &'static str) -> FlagSpec {
    FlagSpec::new(name, kind, help)
}

fn versioned(op: OperationSpec) -> OperationSpec {
    op.common(CommonFlags::VersionedOutput).version_required()
}

pub(super) fn service() -> ServiceSpec {
    ServiceSpec {
        id: "vr-v3",
        aliases: &["visual-recognition"],
        short_help: "Classify images and train visual classifiers",
        long_help: Some(
            "Classify images, detect faces, and train custom visual \
             classifiers. Credentials come from the VISUAL_RECOGNITION_* \
             environment variables.",
        ),
        auth_key: "visual_recognition",
        default_url: "https://gateway.cirruscloud.net/visual-recognition/api",
        operations: vec![
            classify(),
            detect_faces(),
            create_classifier(),
            list_classifiers(),
            get_classifier(),
            update_classifier(),
            delete_classifier(),
            get_core_ml_model(),
        ],
    }
}

fn classify() -> OperationSpec {
    versioned(
        OperationSpec::new("classify", "Classify images", Handler::VrClassify)
            .flag(flag("images_file", FlagKind::FilePath, "Image or zip of images to classify"))
            .flag(flag("url", FlagKind::String, "URL of an image to classify"))
            .flag(flag("threshold", FlagKind::Float, "Minimum score for a returned class"))
            .flag(flag("owners", FlagKind::StringList, "Classifier owners to search"))
            .flag(flag("classifier_ids", FlagKind::StringList, "Specific classifiers to apply"))
            .flag(flag("accept_language", FlagKind::String, "Language of the class names")),
    )
}

fn detect_faces() -> OperationSpec {
    versioned(
        OperationSpec::new("detect-faces", "Detect faces in images", Handler::VrDetectFaces)
            .flag(flag("images_file", FlagKind::FilePath, "Image or zip of images to inspect"))
            .flag(flag("url", FlagKind::String, "URL of an image to inspect")),
    )
}

fn create_classifier() -> OperationSpec {
    versioned(
        OperationSpec::new(
            "create-classifier",
            "Train a new image classifier",
            Handler::VrCreateClassifier,
        )
        .flag(flag("name", FlagKind::String, "Name of the new classifier").required())
        .flag(
            flag(
                "positive_examples",
                FlagKind::KeyedUpload,
                "JSON object mapping class names to example zip paths",
            )
            .required(),
        )
        .flag(flag(
            "negative_examples",
            FlagKind::FilePath,
            "Zip of images matching no class",
        )),
    )
}

fn list_classifiers() -> OperationSpec {
    versioned(
        OperationSpec::new(
            "list-classifiers",
            "List image classifiers",
            Handler::VrListClassifiers,
        )
        .flag(flag("verbose", FlagKind::Bool, "Include classifier details")),
    )
}

fn get_classifier() -> OperationSpec {
    versioned(
        OperationSpec::new(
            "get-classifier",
            "Get an image classifier",
            Handler::VrGetClassifier,
        )
        .flag(flag("classifier_id", FlagKind::String, "Classifier to inspect").required()),
    )
}

fn update_classifier() -> OperationSpec {
    versioned(
        OperationSpec::new(
            "update-classifier",
            "Retrain an image classifier with new examples",
            Handler::VrUpdateClassifier,
        )
        .flag(flag("classifier_id", FlagKind::String, "Classifier to retrain").required())
        .flag(flag(
            "positive_examples",
            FlagKind::KeyedUpload,
            "JSON object mapping class names to example zip paths",
        ))
        .flag(flag(
            "negative_examples",
            FlagKind::FilePath,
            "Zip of images matching no class",
        )),
    )
}

fn delete_classifier() -> OperationSpec {
    versioned(
        OperationSpec::new(
            "delete-classifier",
            "Delete an image classifier",
            Handler::VrDeleteClassifier,
        )
        .flag(flag("classifier_id", FlagKind::String, "Classifier to delete").required())
        .flag(flag("force", FlagKind::Bool, "Skip the confirmation prompt").short('f'))
        .returns(ReturnKind::Ack),
    )
}

fn get_core_ml_model() -> OperationSpec {
    versioned(
        OperationSpec::new(
            "get-core-ml-model",
            "Download the Core ML model of a classifier",
            Handler::VrGetCoreMlModel,
        )
        .flag(flag("classifier_id", FlagKind::String, "Classifier whose model to download").required())
        .returns(ReturnKind::Binary),
    )
}
