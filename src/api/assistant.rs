//! Assistant transport methods

use serde_json::Value;

use crate::api::{push_opt, Query, ServiceClient};
use crate::error::CliResult;
use crate::models::assistant::{
    CreateIntentRequest, CreateWorkspaceOptions, GetWorkspaceOptions, ListIntentsOptions,
    ListLogsOptions, ListWorkspacesOptions, MessageOptions, UpdateWorkspaceOptions,
};

impl ServiceClient {
    /// Send a message to a workspace
    pub async fn message(&self, workspace_id: &str, options: &MessageOptions) -> CliResult<Value> {
        let path = format!("/v1/workspaces/{}/message", workspace_id);
        self.post_json(&path, Query::new(), options).await
    }

    /// List workspaces
    pub async fn list_workspaces(&self, options: &ListWorkspacesOptions) -> CliResult<Value> {
        let mut query = Query::new();
        push_opt(&mut query, "page_limit", options.page_limit);
        push_opt(&mut query, "include_count", options.include_count);
        push_opt(&mut query, "sort", options.sort.as_ref());
        push_opt(&mut query, "cursor", options.cursor.as_ref());
        push_opt(&mut query, "include_audit", options.include_audit);
        self.get_json("/v1/workspaces", query).await
    }

    /// Get one workspace
    pub async fn get_workspace(
        &self,
        workspace_id: &str,
        options: &GetWorkspaceOptions,
    ) -> CliResult<Value> {
        let mut query = Query::new();
        push_opt(&mut query, "export", options.export);
        push_opt(&mut query, "include_audit", options.include_audit);
        push_opt(&mut query, "sort", options.sort.as_ref());
        let path = format!("/v1/workspaces/{}", workspace_id);
        self.get_json(&path, query).await
    }

    /// Create a workspace
    pub async fn create_workspace(&self, options: &CreateWorkspaceOptions) -> CliResult<Value> {
        self.post_json("/v1/workspaces", Query::new(), options).await
    }

    /// Update a workspace
    pub async fn update_workspace(
        &self,
        workspace_id: &str,
        append: Option<bool>,
        options: &UpdateWorkspaceOptions,
    ) -> CliResult<Value> {
        let mut query = Query::new();
        push_opt(&mut query, "append", append);
        let path = format!("/v1/workspaces/{}", workspace_id);
        self.post_json(&path, query, options).await
    }

    /// Delete a workspace
    pub async fn delete_workspace(&self, workspace_id: &str) -> CliResult<()> {
        let path = format!("/v1/workspaces/{}", workspace_id);
        self.delete(&path, Query::new()).await
    }

    /// List intents in a workspace
    pub async fn list_intents(
        &self,
        workspace_id: &str,
        options: &ListIntentsOptions,
    ) -> CliResult<Value> {
        let mut query = Query::new();
        push_opt(&mut query, "export", options.export);
        push_opt(&mut query, "page_limit", options.page_limit);
        push_opt(&mut query, "include_count", options.include_count);
        push_opt(&mut query, "sort", options.sort.as_ref());
        push_opt(&mut query, "cursor", options.cursor.as_ref());
        push_opt(&mut query, "include_audit", options.include_audit);
        let path = format!("/v1/workspaces/{}/intents", workspace_id);
        self.get_json(&path, query).await
    }

    /// Create an intent in a workspace
    pub async fn create_intent(
        &self,
        workspace_id: &str,
        request: &CreateIntentRequest,
    ) -> CliResult<Value> {
        let path = format!("/v1/workspaces/{}/intents", workspace_id);
        self.post_json(&path, Query::new(), request).await
    }

    /// Delete an intent from a workspace
    pub async fn delete_intent(&self, workspace_id: &str, intent: &str) -> CliResult<()> {
        let path = format!("/v1/workspaces/{}/intents/{}", workspace_id, intent);
        self.delete(&path, Query::new()).await
    }

    /// List message logs for a workspace
    pub async fn list_logs(
        &self,
        workspace_id: &str,
        options: &ListLogsOptions,
    ) -> CliResult<Value> {
        let mut query = Query::new();
        push_opt(&mut query, "sort", options.sort.as_ref());
        push_opt(&mut query, "filter", options.filter.as_ref());
        push_opt(&mut query, "page_limit", options.page_limit);
        push_opt(&mut query, "cursor", options.cursor.as_ref());
        let path = format!("/v1/workspaces/{}/logs", workspace_id);
        self.get_json(&path, query).await
    }
}
