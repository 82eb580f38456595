//! Visual-recognition operation handlers

use crate::binder::{BoundFlags, FileUpload};
use crate::commands::{require_string, require_uploads, Outcome};
use crate::context::InvocationContext;
use crate::error::CliResult;
use crate::models::vr::ClassifyOptions;

pub fn build_classify(flags: &mut BoundFlags) -> (Option<FileUpload>, ClassifyOptions) {
    let images_file = flags.take_upload("images_file");
    let options = ClassifyOptions {
        url: flags.take_string("url"),
        threshold: flags.take_float("threshold"),
        owners: flags.take_list("owners"),
        classifier_ids: flags.take_list("classifier_ids"),
        accept_language: flags.take_string("accept_language"),
    };
    (images_file, options)
}

pub async fn classify(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let (images_file, options) = build_classify(&mut ctx.flags);
    let client = ctx.client()?;
    let value = client.classify_images(images_file, &options).await?;
    Ok(Outcome::Value(value))
}

pub async fn detect_faces(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let images_file = ctx.flags.take_upload("images_file");
    let url = ctx.flags.take_string("url");
    let client = ctx.client()?;
    let value = client.detect_faces(images_file, url.as_deref()).await?;
    Ok(Outcome::Value(value))
}

pub fn build_create_classifier(
    flags: &mut BoundFlags,
) -> CliResult<(String, Vec<(String, FileUpload)>, Option<FileUpload>)> {
    let name = require_string(flags, "name")?;
    let positive_examples = require_uploads(flags, "positive_examples")?;
    let negative_examples = flags.take_upload("negative_examples");
    Ok((name, positive_examples, negative_examples))
}

pub async fn create_classifier(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let (name, positive_examples, negative_examples) = build_create_classifier(&mut ctx.flags)?;
    let client = ctx.client()?;
    let value = client
        .create_image_classifier(&name, positive_examples, negative_examples)
        .await?;
    Ok(Outcome::Value(value))
}

pub async fn list_classifiers(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let verbose = ctx.flags.take_bool("verbose");
    let client = ctx.client()?;
    let value = client.list_image_classifiers(verbose).await?;
    Ok(Outcome::Value(value))
}

pub async fn get_classifier(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let classifier_id = require_string(&mut ctx.flags, "classifier_id")?;
    let client = ctx.client()?;
    let value = client.get_image_classifier(&classifier_id).await?;
    Ok(Outcome::Value(value))
}

pub fn build_update_classifier(
    flags: &mut BoundFlags,
) -> CliResult<(String, Vec<(String, FileUpload)>, Option<FileUpload>)> {
    let classifier_id = require_string(flags, "classifier_id")?;
    let positive_examples = flags.take_uploads("positive_examples").unwrap_or_default();
    let negative_examples = flags.take_upload("negative_examples");
    Ok((classifier_id, positive_examples, negative_examples))
}

pub async fn update_classifier(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let (classifier_id, positive_examples, negative_examples) =
        build_update_classifier(&mut ctx.flags)?;
    let client = ctx.client()?;
    let value = client
        .update_image_classifier(&classifier_id, positive_examples, negative_examples)
        .await?;
    Ok(Outcome::Value(value))
}

pub async fn delete_classifier(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let classifier_id = require_string(&mut ctx.flags, "classifier_id")?;
    if !ctx.confirm(&format!("Delete classifier '{}'?", classifier_id))? {
        return Ok(Outcome::Cancelled);
    }
    let client = ctx.client()?;
    client.delete_image_classifier(&classifier_id).await?;
    Ok(Outcome::Ack)
}

pub async fn get_core_ml_model(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let classifier_id = require_string(&mut ctx.flags, "classifier_id")?;
    let client = ctx.client()?;
    let data = client.get_core_ml_model(&classifier_id).await?;
    Ok(Outcome::Binary(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::bind;
    use crate::dispatch::operation_command;
    use crate::registry::Registry;
    use std::io::Write;

    fn op(verb: &str) -> crate::registry::OperationSpec {
        Registry::standard()
            .unwrap()
            .service("vr-v3")
            .unwrap()
            .operation(verb)
            .unwrap()
            .clone()
    }

    #[test]
    fn test_classify_by_url_needs_no_upload() {
        let op = op("classify");
        let matches = operation_command(&op)
            .try_get_matches_from([
                "classify",
                "--url",
                "https://example.test/cat.jpg",
                "--threshold",
                "0.6",
                "--owners",
                "me",
                "--version",
                "2018-03-19",
            ])
            .unwrap();
        let mut flags = bind(&op, &matches).unwrap();
        let (images_file, options) = build_classify(&mut flags);
        assert!(images_file.is_none());
        assert_eq!(options.threshold, Some(0.6));
        assert_eq!(options.owners, Some(vec!["me".to_string()]));
        assert!(options.classifier_ids.is_none());
    }

    #[test]
    fn test_create_classifier_keyed_uploads() {
        let mut cats = tempfile::NamedTempFile::new().unwrap();
        cats.write_all(b"cat-zip").unwrap();
        let raw = format!(r#"{{"cats":"{}"}}"#, cats.path().display());

        let op = op("create-classifier");
        let matches = operation_command(&op)
            .try_get_matches_from([
                "create-classifier",
                "--name",
                "pets",
                "--positive_examples",
                raw.as_str(),
                "--version",
                "2018-03-19",
            ])
            .unwrap();
        let mut flags = bind(&op, &matches).unwrap();
        let (name, positive, negative) = build_create_classifier(&mut flags).unwrap();
        assert_eq!(name, "pets");
        assert_eq!(positive[0].0, "cats");
        assert_eq!(positive[0].1.data, b"cat-zip");
        assert!(negative.is_none());
    }

    #[test]
    fn test_get_core_ml_model_requires_output_file() {
        // Seed S5 parse shape: the binary-returning operation appends a
        // required --output_file.
        let op = op("get-core-ml-model");
        let missing = operation_command(&op).try_get_matches_from([
            "get-core-ml-model",
            "--classifier_id",
            "x",
            "--version",
            "2018-03-19",
        ]);
        assert!(missing.is_err());

        let ok = operation_command(&op).try_get_matches_from([
            "get-core-ml-model",
            "--classifier_id",
            "x",
            "--version",
            "2018-03-19",
            "--output_file",
            "model.mlmodel",
        ]);
        assert!(ok.is_ok());
    }
}
