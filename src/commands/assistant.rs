//! Assistant operation handlers

use crate::binder::BoundFlags;
use crate::commands::{require_string, Outcome};
use crate::context::InvocationContext;
use crate::error::CliResult;
use crate::models::assistant::{
    CreateIntentRequest, CreateWorkspaceOptions, GetWorkspaceOptions, ListIntentsOptions,
    ListLogsOptions, ListWorkspacesOptions, MessageOptions, UpdateWorkspaceOptions,
};

/// Build the message payload from the user-set flags
pub fn build_message(flags: &mut BoundFlags) -> CliResult<(String, MessageOptions)> {
    let workspace_id = require_string(flags, "workspace_id")?;
    let options = MessageOptions {
        input: flags.take_json("input"),
        alternate_intents: flags.take_bool("alternate_intents"),
        context: flags.take_json("context"),
        entities: flags.take_json_array("entities"),
        intents: flags.take_json_array("intents"),
        nodes_visited_details: flags.take_bool("nodes_visited_details"),
    };
    Ok((workspace_id, options))
}

pub async fn message(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let (workspace_id, options) = build_message(&mut ctx.flags)?;
    let client = ctx.client()?;
    let value = client.message(&workspace_id, &options).await?;
    Ok(Outcome::Value(value))
}

pub fn build_list_workspaces(flags: &mut BoundFlags) -> ListWorkspacesOptions {
    ListWorkspacesOptions {
        page_limit: flags.take_int("page_limit"),
        include_count: flags.take_bool("include_count"),
        sort: flags.take_string("sort"),
        cursor: flags.take_string("cursor"),
        include_audit: flags.take_bool("include_audit"),
    }
}

pub async fn list_workspaces(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let options = build_list_workspaces(&mut ctx.flags);
    let client = ctx.client()?;
    let value = client.list_workspaces(&options).await?;
    Ok(Outcome::Value(value))
}

pub fn build_get_workspace(flags: &mut BoundFlags) -> CliResult<(String, GetWorkspaceOptions)> {
    let workspace_id = require_string(flags, "workspace_id")?;
    let options = GetWorkspaceOptions {
        export: flags.take_bool("export"),
        include_audit: flags.take_bool("include_audit"),
        sort: flags.take_string("sort"),
    };
    Ok((workspace_id, options))
}

pub async fn get_workspace(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let (workspace_id, options) = build_get_workspace(&mut ctx.flags)?;
    let client = ctx.client()?;
    let value = client.get_workspace(&workspace_id, &options).await?;
    Ok(Outcome::Value(value))
}

pub fn build_create_workspace(flags: &mut BoundFlags) -> CreateWorkspaceOptions {
    CreateWorkspaceOptions {
        name: flags.take_string("name"),
        description: flags.take_string("description"),
        language: flags.take_string("language"),
        learning_opt_out: flags.take_bool("learning_opt_out"),
        metadata: flags.take_json("metadata"),
        intents: flags.take_json_array("intents"),
        entities: flags.take_json_array("entities"),
        dialog_nodes: flags.take_json_array("dialog_nodes"),
        counterexamples: flags.take_json_array("counterexamples"),
    }
}

pub async fn create_workspace(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let options = build_create_workspace(&mut ctx.flags);
    let client = ctx.client()?;
    let value = client.create_workspace(&options).await?;
    Ok(Outcome::Value(value))
}

pub fn build_update_workspace(
    flags: &mut BoundFlags,
) -> CliResult<(String, Option<bool>, UpdateWorkspaceOptions)> {
    let workspace_id = require_string(flags, "workspace_id")?;
    let append = flags.take_bool("append");
    let options = UpdateWorkspaceOptions {
        name: flags.take_string("name"),
        description: flags.take_string("description"),
        language: flags.take_string("language"),
        metadata: flags.take_json("metadata"),
    };
    Ok((workspace_id, append, options))
}

pub async fn update_workspace(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let (workspace_id, append, options) = build_update_workspace(&mut ctx.flags)?;
    let client = ctx.client()?;
    let value = client
        .update_workspace(&workspace_id, append, &options)
        .await?;
    Ok(Outcome::Value(value))
}

pub async fn delete_workspace(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let workspace_id = require_string(&mut ctx.flags, "workspace_id")?;
    if !ctx.confirm(&format!("Delete workspace '{}'?", workspace_id))? {
        return Ok(Outcome::Cancelled);
    }
    let client = ctx.client()?;
    client.delete_workspace(&workspace_id).await?;
    Ok(Outcome::Ack)
}

pub fn build_list_intents(flags: &mut BoundFlags) -> CliResult<(String, ListIntentsOptions)> {
    let workspace_id = require_string(flags, "workspace_id")?;
    let options = ListIntentsOptions {
        export: flags.take_bool("export"),
        page_limit: flags.take_int("page_limit"),
        include_count: flags.take_bool("include_count"),
        sort: flags.take_string("sort"),
        cursor: flags.take_string("cursor"),
        include_audit: flags.take_bool("include_audit"),
    };
    Ok((workspace_id, options))
}

pub async fn list_intents(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let (workspace_id, options) = build_list_intents(&mut ctx.flags)?;
    let client = ctx.client()?;
    let value = client.list_intents(&workspace_id, &options).await?;
    Ok(Outcome::Value(value))
}

pub fn build_create_intent(flags: &mut BoundFlags) -> CliResult<(String, CreateIntentRequest)> {
    let workspace_id = require_string(flags, "workspace_id")?;
    let request = CreateIntentRequest {
        intent: require_string(flags, "intent")?,
        description: flags.take_string("description"),
        examples: flags.take_json_array("examples"),
    };
    Ok((workspace_id, request))
}

pub async fn create_intent(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let (workspace_id, request) = build_create_intent(&mut ctx.flags)?;
    let client = ctx.client()?;
    let value = client.create_intent(&workspace_id, &request).await?;
    Ok(Outcome::Value(value))
}

pub async fn delete_intent(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let workspace_id = require_string(&mut ctx.flags, "workspace_id")?;
    let intent = require_string(&mut ctx.flags, "intent")?;
    if !ctx.confirm(&format!("Delete intent '{}'?", intent))? {
        return Ok(Outcome::Cancelled);
    }
    let client = ctx.client()?;
    client.delete_intent(&workspace_id, &intent).await?;
    Ok(Outcome::Ack)
}

pub fn build_list_logs(flags: &mut BoundFlags) -> CliResult<(String, ListLogsOptions)> {
    let workspace_id = require_string(flags, "workspace_id")?;
    let options = ListLogsOptions {
        sort: flags.take_string("sort"),
        filter: flags.take_string("filter"),
        page_limit: flags.take_int("page_limit"),
        cursor: flags.take_string("cursor"),
    };
    Ok((workspace_id, options))
}

pub async fn list_logs(ctx: &mut InvocationContext) -> CliResult<Outcome> {
    let (workspace_id, options) = build_list_logs(&mut ctx.flags)?;
    let client = ctx.client()?;
    let value = client.list_logs(&workspace_id, &options).await?;
    Ok(Outcome::Value(value))
}
