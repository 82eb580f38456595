//! Speech-to-text operation handlers

use crate::binder::{BoundFlags, FileUpload};
use crate::commands::{require_string, require_upload, require_uploads, Outcome};
use crate::context::InvocationContext;
use crate::error::CliResult;
use crate::models::stt::{CreateLanguageModelRequest, RecognizeOptions};

pub async fn list_models(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let client = ctx.client()?;
    let value = client.list_speech_models().await?;
    Ok(Outcome::Value(value))
}

pub async fn get_model(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let model_id = require_string(&mut ctx.flags, "model_id")?;
    let client = ctx.client()?;
    let value = client.get_speech_model(&model_id).await?;
    Ok(Outcome::Value(value))
}

pub fn build_recognize(
    flags: &mut BoundFlags,
) -> CliResult<(FileUpload, Option<String>, RecognizeOptions)> {
    let audio = require_upload(flags, "audio")?;
    let content_type = flags.take_string("content_type");
    let options = RecognizeOptions {
        model: flags.take_string("model"),
        language_customization_id: flags.take_string("language_customization_id"),
        acoustic_customization_id: flags.take_string("acoustic_customization_id"),
        keywords: flags.take_list("keywords"),
        keywords_threshold: flags.take_float("keywords_threshold"),
        max_alternatives: flags.take_int("max_alternatives"),
        word_alternatives_threshold: flags.take_float("word_alternatives_threshold"),
        word_confidence: flags.take_bool("word_confidence"),
        timestamps: flags.take_bool("timestamps"),
        profanity_filter: flags.take_bool("profanity_filter"),
        smart_formatting: flags.take_bool("smart_formatting"),
        speaker_labels: flags.take_bool("speaker_labels"),
    };
    Ok((audio, content_type, options))
}

pub async fn recognize(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let (audio, content_type, options) = build_recognize(&mut ctx.flags)?;
    let client = ctx.client()?;
    let value = client
        .recognize(audio, content_type.as_deref(), &options)
        .await?;
    Ok(Outcome::Value(value))
}

pub fn build_create_language_model(
    flags: &mut BoundFlags,
) -> CliResult<CreateLanguageModelRequest> {
    Ok(CreateLanguageModelRequest {
        name: require_string(flags, "name")?,
        base_model_name: require_string(flags, "base_model_name")?,
        dialect: flags.take_string("dialect"),
        description: flags.take_string("description"),
    })
}

pub async fn create_language_model(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let request = build_create_language_model(&mut ctx.flags)?;
    let client = ctx.client()?;
    let value = client.create_language_model(&request).await?;
    Ok(Outcome::Value(value))
}

pub async fn list_language_models(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let language = ctx.flags.take_string("language");
    let client = ctx.client()?;
    let value = client.list_language_models(language.as_deref()).await?;
    Ok(Outcome::Value(value))
}

pub async fn get_language_model(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let customization_id = require_string(&mut ctx.flags, "customization_id")?;
    let client = ctx.client()?;
    let value = client.get_language_model(&customization_id).await?;
    Ok(Outcome::Value(value))
}

pub async fn delete_language_model(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let customization_id = require_string(&mut ctx.flags, "customization_id")?;
    if !ctx.confirm(&format!("Delete language model '{}'?", customization_id))? {
        return Ok(Outcome::Cancelled);
    }
    let client = ctx.client()?;
    client.delete_language_model(&customization_id).await?;
    Ok(Outcome::Ack)
}

pub async fn train_language_model(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let customization_id = require_string(&mut ctx.flags, "customization_id")?;
    let word_type_to_add = ctx.flags.take_string("word_type_to_add");
    let client = ctx.client()?;
    client
        .train_language_model(&customization_id, word_type_to_add.as_deref())
        .await?;
    Ok(Outcome::Ack)
}

pub fn build_add_corpus(
    flags: &mut BoundFlags,
) -> CliResult<(String, String, FileUpload, Option<bool>)> {
    let customization_id = require_string(flags, "customization_id")?;
    let corpus_name = require_string(flags, "corpus_name")?;
    let corpus_file = require_upload(flags, "corpus_file")?;
    let allow_overwrite = flags.take_bool("allow_overwrite");
    Ok((customization_id, corpus_name, corpus_file, allow_overwrite))
}

pub async fn add_corpus(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let (customization_id, corpus_name, corpus_file, allow_overwrite) =
        build_add_corpus(&mut ctx.flags)?;
    let client = ctx.client()?;
    client
        .add_corpus(&customization_id, &corpus_name, corpus_file, allow_overwrite)
        .await?;
    Ok(Outcome::Ack)
}

pub fn build_create_classifier(
    flags: &mut BoundFlags,
) -> CliResult<(Option<String>, Vec<(String, FileUpload)>, Option<FileUpload>)> {
    let name = flags.take_string("name");
    let positive_examples = require_uploads(flags, "positive_examples")?;
    let negative_examples = flags.take_upload("negative_examples");
    Ok((name, positive_examples, negative_examples))
}

pub async fn create_classifier(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let (name, positive_examples, negative_examples) = build_create_classifier(&mut ctx.flags)?;
    let client = ctx.client()?;
    let value = client
        .create_audio_classifier(name.as_deref(), positive_examples, negative_examples)
        .await?;
    Ok(Outcome::Value(value))
}
