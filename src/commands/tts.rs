//! Text-to-speech operation handlers

use crate::binder::BoundFlags;
use crate::commands::{require_string, Outcome};
use crate::context::InvocationContext;
use crate::error::CliResult;
use crate::models::tts::{SynthesizeOptions, SynthesizeRequest};

pub async fn list_voices(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let client = ctx.client()?;
    let value = client.list_voices().await?;
    Ok(Outcome::Value(value))
}

pub async fn get_voice(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let voice = require_string(&mut ctx.flags, "voice")?;
    let customization_id = ctx.flags.take_string("customization_id");
    let client = ctx.client()?;
    let value = client
        .get_voice(&voice, customization_id.as_deref())
        .await?;
    Ok(Outcome::Value(value))
}

pub fn build_synthesize(
    flags: &mut BoundFlags,
) -> CliResult<(SynthesizeRequest, SynthesizeOptions)> {
    let request = SynthesizeRequest {
        text: require_string(flags, "text")?,
    };
    let options = SynthesizeOptions {
        voice: flags.take_string("voice"),
        accept: flags.take_string("accept"),
        customization_id: flags.take_string("customization_id"),
    };
    Ok((request, options))
}

pub async fn synthesize(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let (request, options) = build_synthesize(&mut ctx.flags)?;
    let client = ctx.client()?;
    let data = client.synthesize(&request, &options).await?;
    Ok(Outcome::Binary(data))
}
