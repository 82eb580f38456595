//! assistant-v1 service catalog

use crate::commands::Handler;
use crate::registry::{CommonFlags, FlagKind, FlagSpec, OperationSpec, ReturnKind, ServiceSpec};

fn flag(name: &'static str, kind: FlagKind, help: &'static str) -> FlagSpec {
    FlagSpec::new(name, kind, help)
}

/// Every assistant operation pins an API date.
fn versioned(op: OperationSpec) -> OperationSpec {
    op.common(CommonFlags::VersionedOutput).version_required()
}

pub(super) fn service() -> ServiceSpec {
    ServiceSpec {
        id: "assistant-v1",
        aliases: &["assistant"],
        short_help: "Conversational workspaces, intents, and messaging",
        long_help: Some(
            "Converse with assistant workspaces and manage their intents and \
             training data. Credentials come from the ASSISTANT_* environment \
             variables.",
        ),
        auth_key: "assistant",
        default_url: "https://gateway.cirruscloud.net/assistant/api",
        operations: vec![
            message(),
            list_workspaces(),
            get_workspace(),
            create_workspace(),
            update_workspace(),
            delete_workspace(),
            list_intents(),
            create_intent(),
            delete_intent(),
            list_logs(),
        ],
    }
}

fn message() -> OperationSpec {
    versioned(
        OperationSpec::new(
            "message",
            "Send a message to a workspace and get its response",
            Handler::AssistantMessage,
        )
        .flag(flag("workspace_id", FlagKind::String, "Workspace to converse with").required())
        .flag(flag("input", FlagKind::JsonObject, "Message input as a JSON object"))
        .flag(flag("alternate_intents", FlagKind::Bool, "Return all matching intents"))
        .flag(flag(
            "context",
            FlagKind::JsonObject,
            "Conversation state carried over from the previous response",
        ))
        .flag(flag("entities", FlagKind::JsonArray, "Entities to use instead of detection"))
        .flag(flag("intents", FlagKind::JsonArray, "Intents to use instead of detection"))
        .flag(flag(
            "nodes_visited_details",
            FlagKind::Bool,
            "Include details about visited dialog nodes",
        )),
    )
}

fn list_workspaces() -> OperationSpec {
    versioned(
        OperationSpec::new(
            "list-workspaces",
            "List the workspaces of the instance",
            Handler::AssistantListWorkspaces,
        )
        .flag(flag("page_limit", FlagKind::Int, "Number of records per page"))
        .flag(flag("include_count", FlagKind::Bool, "Include the total record count"))
        .flag(flag("sort", FlagKind::String, "Sort order (name or updated)"))
        .flag(flag("cursor", FlagKind::String, "Pagination token from a previous page"))
        .flag(flag("include_audit", FlagKind::Bool, "Include audit timestamps")),
    )
}

fn get_workspace() -> OperationSpec {
    versioned(
        OperationSpec::new(
            "get-workspace",
            "Get information about a workspace",
            Handler::AssistantGetWorkspace,
        )
        .flag(flag("workspace_id", FlagKind::String, "Workspace to fetch").required())
        .flag(flag("export", FlagKind::Bool, "Include all workspace content"))
        .flag(flag("include_audit", FlagKind::Bool, "Include audit timestamps"))
        .flag(flag("sort", FlagKind::String, "Sort order for exported content")),
    )
}

fn create_workspace() -> OperationSpec {
    versioned(
        OperationSpec::new(
            "create-workspace",
            "Create a workspace",
            Handler::AssistantCreateWorkspace,
        )
        .flag(flag("name", FlagKind::String, "Workspace name"))
        .flag(flag("description", FlagKind::String, "Workspace description"))
        .flag(flag("language", FlagKind::String, "Workspace language code"))
        .flag(flag("learning_opt_out", FlagKind::Bool, "Opt out of service learning"))
        .flag(flag("metadata", FlagKind::JsonObject, "Arbitrary metadata object"))
        .flag(flag("intents", FlagKind::JsonArray, "Initial intents"))
        .flag(flag("entities", FlagKind::JsonArray, "Initial entities"))
        .flag(flag("dialog_nodes", FlagKind::JsonArray, "Initial dialog nodes"))
        .flag(flag("counterexamples", FlagKind::JsonArray, "Initial counterexamples")),
    )
}

fn update_workspace() -> OperationSpec {
    versioned(
        OperationSpec::new(
            "update-workspace",
            "Update an existing workspace",
            Handler::AssistantUpdateWorkspace,
        )
        .flag(flag("workspace_id", FlagKind::String, "Workspace to update").required())
        .flag(flag("name", FlagKind::String, "New workspace name"))
        .flag(flag("description", FlagKind::String, "New workspace description"))
        .flag(flag("language", FlagKind::String, "New workspace language code"))
        .flag(flag("metadata", FlagKind::JsonObject, "Replacement metadata object"))
        .flag(flag("append", FlagKind::Bool, "Append to existing data instead of replacing")),
    )
}

fn delete_workspace() -> OperationSpec {
    versioned(
        OperationSpec::new(
            "delete-workspace",
            "Delete a workspace",
            Handler::AssistantDeleteWorkspace,
        )
        .flag(flag("workspace_id", FlagKind::String, "Workspace to delete").required())
        .flag(flag("force", FlagKind::Bool, "Skip the confirmation prompt").short('f'))
        .returns(ReturnKind::Ack),
    )
}

fn list_intents() -> OperationSpec {
    versioned(
        OperationSpec::new(
            "list-intents",
            "List the intents of a workspace",
            Handler::AssistantListIntents,
        )
        .flag(flag("workspace_id", FlagKind::String, "Workspace to inspect").required())
        .flag(flag("export", FlagKind::Bool, "Include all intent content"))
        .flag(flag("page_limit", FlagKind::Int, "Number of records per page"))
        .flag(flag("include_count", FlagKind::Bool, "Include the total record count"))
        .flag(flag("sort", FlagKind::String, "Sort order (intent or updated)"))
        .flag(flag("cursor", FlagKind::String, "Pagination token from a previous page"))
        .flag(flag("include_audit", FlagKind::Bool, "Include audit timestamps")),
    )
}

fn create_intent() -> OperationSpec {
    versioned(
        OperationSpec::new(
            "create-intent",
            "Create an intent in a workspace",
            Handler::AssistantCreateIntent,
        )
        .flag(flag("workspace_id", FlagKind::String, "Workspace to extend").required())
        .flag(flag("intent", FlagKind::String, "Name of the new intent").required())
        .flag(flag("description", FlagKind::String, "Intent description"))
        .flag(flag("examples", FlagKind::JsonArray, "User input examples")),
    )
}

fn delete_intent() -> OperationSpec {
    versioned(
        OperationSpec::new(
            "delete-intent",
            "Delete an intent from a workspace",
            Handler::AssistantDeleteIntent,
        )
        .flag(flag("workspace_id", FlagKind::String, "Workspace to modify").required())
        .flag(flag("intent", FlagKind::String, "Intent to delete").required())
        .flag(flag("force", FlagKind::Bool, "Skip the confirmation prompt").short('f'))
        .returns(ReturnKind::Ack),
    )
}

fn list_logs() -> OperationSpec {
    versioned(
        OperationSpec::new(
            "list-logs",
            "List message logs of a workspace",
            Handler::AssistantListLogs,
        )
        .flag(flag("workspace_id", FlagKind::String, "Workspace to inspect").required())
        .flag(flag("sort", FlagKind::String, "Sort order (request_timestamp)"))
        .flag(flag("filter", FlagKind::String, "Filter expression for log entries"))
        .flag(flag("page_limit", FlagKind::Int, "Number of records per page"))
        .flag(flag("cursor", FlagKind::String, "Pagination token from a previous page")),
    )
}
