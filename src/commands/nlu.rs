//! Natural-language-understanding operation handlers

use crate::binder::BoundFlags;
use crate::commands::{require_string, Outcome};
use crate::context::InvocationContext;
use crate::error::CliResult;
use crate::models::nlu::AnalyzeOptions;

pub fn build_analyze(flags: &mut BoundFlags) -> AnalyzeOptions {
    AnalyzeOptions {
        features: flags.take_json("features"),
        text: flags.take_string("text"),
        html: flags.take_string("html"),
        url: flags.take_string("url"),
        clean: flags.take_bool("clean"),
        xpath: flags.take_string("xpath"),
        fallback_to_raw: flags.take_bool("fallback_to_raw"),
        return_analyzed_text: flags.take_bool("return_analyzed_text"),
        language: flags.take_string("language"),
        limit_text_characters: flags.take_int("limit_text_characters"),
    }
}

pub async fn analyze(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let options = build_analyze(&mut ctx.flags);
    let client = ctx.client()?;
    let value = client.analyze(&options).await?;
    Ok(Outcome::Value(value))
}

pub async fn list_models(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let client = ctx.client()?;
    let value = client.list_models().await?;
    Ok(Outcome::Value(value))
}

/// Declared value-returning: the service echoes the deleted model
pub async fn delete_model(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let model_id = require_string(&mut ctx.flags, "model_id")?;
    let client = ctx.client()?;
    let value = client.delete_model(&model_id).await?;
    Ok(Outcome::Value(value))
}
