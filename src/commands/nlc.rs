//! Natural-language-classifier operation handlers

use crate::binder::{BoundFlags, FileUpload};
use crate::commands::{require_json_array, require_string, require_upload, Outcome};
use crate::context::InvocationContext;
use crate::error::CliResult;
use crate::models::nlc::{ClassifyCollectionRequest, ClassifyRequest};

pub fn build_classify(flags: &mut BoundFlags) -> CliResult<(String, ClassifyRequest)> {
    let classifier_id = require_string(flags, "classifier_id")?;
    let request = ClassifyRequest {
        text: require_string(flags, "text")?,
    };
    Ok((classifier_id, request))
}

pub async fn classify(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let (classifier_id, request) = build_classify(&mut ctx.flags)?;
    let client = ctx.client()?;
    let value = client.classify(&classifier_id, &request).await?;
    Ok(Outcome::Value(value))
}

pub fn build_classify_collection(
    flags: &mut BoundFlags,
) -> CliResult<(String, ClassifyCollectionRequest)> {
    let classifier_id = require_string(flags, "classifier_id")?;
    let request = ClassifyCollectionRequest {
        collection: require_json_array(flags, "collection")?,
    };
    Ok((classifier_id, request))
}

pub async fn classify_collection(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let (classifier_id, request) = build_classify_collection(&mut ctx.flags)?;
    let client = ctx.client()?;
    let value = client.classify_collection(&classifier_id, &request).await?;
    Ok(Outcome::Value(value))
}

pub fn build_create_classifier(flags: &mut BoundFlags) -> CliResult<(FileUpload, FileUpload)> {
    let training_metadata = require_upload(flags, "training_metadata")?;
    let training_data = require_upload(flags, "training_data")?;
    Ok((training_metadata, training_data))
}

pub async fn create_classifier(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let (training_metadata, training_data) = build_create_classifier(&mut ctx.flags)?;
    let client = ctx.client()?;
    let value = client
        .create_text_classifier(training_metadata, training_data)
        .await?;
    Ok(Outcome::Value(value))
}

pub async fn list_classifiers(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let client = ctx.client()?;
    let value = client.list_text_classifiers().await?;
    Ok(Outcome::Value(value))
}

pub async fn get_classifier(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let classifier_id = require_string(&mut ctx.flags, "classifier_id")?;
    let client = ctx.client()?;
    let value = client.get_text_classifier(&classifier_id).await?;
    Ok(Outcome::Value(value))
}

pub async fn delete_classifier(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let classifier_id = require_string(&mut ctx.flags, "classifier_id")?;
    if !ctx.confirm(&format!("Delete classifier '{}'?", classifier_id))? {
        return Ok(Outcome::Cancelled);
    }
    let client = ctx.client()?;
    client.delete_text_classifier(&classifier_id).await?;
    Ok(Outcome::Ack)
}
