//! Per-invocation context
//!
//! Built by the dispatcher for the matched operation and owned exclusively by
//! its handler; discarded after rendering. Carries the bound flags, the
//! resolved authenticator and endpoint, and the output selections consumed by
//! the renderer.

use std::path::PathBuf;

use dialoguer::Confirm;

use crate::api::ServiceClient;
use crate::auth::Authenticator;
use crate::binder::BoundFlags;
use crate::error::CliResult;
use crate::render::OutputFormat;

/// Everything one handler needs for one run
pub struct InvocationContext {
    /// Flags the user supplied, decoded
    pub flags: BoundFlags,
    /// Shared read-only authenticator for this service
    pub authenticator: Authenticator,
    /// Service endpoint (environment override or catalog default)
    pub endpoint: String,
    /// Pinned API date, where the operation declares one
    pub version: Option<String>,
    /// Selected output format for value results
    pub output: OutputFormat,
    /// Optional projection applied before formatting
    pub jmes_query: Option<String>,
    /// Destination for binary-stream results
    pub output_file: Option<PathBuf>,
}

impl InvocationContext {
    /// Construct the transport client for this invocation.
    ///
    /// Failure is fatal; the handler propagates it straight to the error gate.
    pub fn client(&self) -> CliResult<ServiceClient> {
        ServiceClient::new(
            self.endpoint.clone(),
            self.authenticator.clone(),
            self.version.clone(),
        )
    }

    /// Confirm a destructive run.
    ///
    /// A supplied `--force` flag skips the prompt. Returns false when the
    /// user declines; the dispatcher then exits without calling the service.
    pub fn confirm(&mut self, prompt: &str) -> CliResult<bool> {
        if self.flags.take_bool("force").unwrap_or(false) {
            return Ok(true);
        }
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }
}
