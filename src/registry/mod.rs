//! Declarative command registry
//!
//! The full tree of services and operations is described as data: a
//! [`ServiceSpec`] per service, an [`OperationSpec`] per remote operation,
//! and a [`FlagSpec`] per flag. The dispatcher materializes a `clap` command
//! tree from this registry, and the plugin exporter walks it; both see the
//! same immutable records. The registry is built once at startup and never
//! mutated afterwards.

pub mod catalog;

use crate::commands::Handler;
use crate::error::{CliError, CliResult};

/// Flag names with fixed semantics everywhere they appear.
///
/// Operations may not declare flags with these names; the registry appends
/// them through the common-flag bundles and the dispatcher consumes them
/// into the invocation context.
pub const RESERVED_FLAGS: [&str; 4] = ["output", "jmes_query", "version", "output_file"];

/// Value kind of a single flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    String,
    Bool,
    Int,
    Float,
    /// Comma-separated or repeated string values
    StringList,
    /// Inline JSON object
    JsonObject,
    /// Inline JSON array
    JsonArray,
    /// Path opened for reading and sent as a byte stream
    FilePath,
    /// Inline JSON object mapping key to file path; every file is opened
    KeyedUpload,
    /// Path retained for the renderer, never sent to the service
    OutputPath,
}

/// Declarative description of one flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSpec {
    pub name: &'static str,
    pub short: Option<char>,
    pub kind: FlagKind,
    pub default: Option<&'static str>,
    pub required: bool,
    pub help: &'static str,
}

impl FlagSpec {
    pub fn new(name: &'static str, kind: FlagKind, help: &'static str) -> Self {
        Self {
            name,
            short: None,
            kind,
            default: None,
            required: false,
            help,
        }
    }

    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }
}

/// Common flag bundle appended after an operation's own flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonFlags {
    /// No common flags
    None,
    /// `--output` and `--jmes_query`
    Output,
    /// `--version` only
    Versioned,
    /// `--version`, `--output`, and `--jmes_query`
    VersionedOutput,
}

impl CommonFlags {
    pub fn has_version(self) -> bool {
        matches!(self, CommonFlags::Versioned | CommonFlags::VersionedOutput)
    }

    pub fn has_output(self) -> bool {
        matches!(self, CommonFlags::Output | CommonFlags::VersionedOutput)
    }
}

/// What the remote operation yields, declared up front.
///
/// Rendering dispatches on this declaration, never on runtime inspection of
/// the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnKind {
    /// A structured value to be formatted
    Value,
    /// Acknowledgement only; the CLI prints an OK marker
    Ack,
    /// A byte stream written to `--output_file`
    Binary,
}

/// Declarative description of one remote operation
#[derive(Debug, Clone, PartialEq)]
pub struct OperationSpec {
    pub verb: &'static str,
    pub aliases: &'static [&'static str],
    pub short_help: &'static str,
    pub long_help: Option<&'static str>,
    pub flags: Vec<FlagSpec>,
    pub common: CommonFlags,
    /// Whether `--version` is required for this operation (only meaningful
    /// when the common bundle carries a version flag)
    pub version_required: bool,
    pub returns: ReturnKind,
    pub handler: Handler,
}

impl OperationSpec {
    pub fn new(verb: &'static str, short_help: &'static str, handler: Handler) -> Self {
        Self {
            verb,
            aliases: &[],
            short_help,
            long_help: None,
            flags: Vec::new(),
            common: CommonFlags::None,
            version_required: false,
            returns: ReturnKind::Value,
            handler,
        }
    }

    pub fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn long_help(mut self, help: &'static str) -> Self {
        self.long_help = Some(help);
        self
    }

    pub fn flag(mut self, flag: FlagSpec) -> Self {
        self.flags.push(flag);
        self
    }

    pub fn common(mut self, common: CommonFlags) -> Self {
        self.common = common;
        self
    }

    pub fn version_required(mut self) -> Self {
        self.version_required = true;
        self
    }

    pub fn returns(mut self, returns: ReturnKind) -> Self {
        self.returns = returns;
        self
    }

    /// The declared flags plus the common suffix, in help order.
    ///
    /// The suffix order is fixed: `--version`, `--output`, `--jmes_query`,
    /// then `--output_file` for binary-returning operations.
    pub fn effective_flags(&self) -> Vec<FlagSpec> {
        let mut flags = self.flags.clone();
        if self.common.has_version() {
            let mut version = FlagSpec::new(
                "version",
                FlagKind::String,
                "Release date of the API version to use, in YYYY-MM-DD format",
            )
            .short('v');
            if self.version_required {
                version = version.required();
            }
            flags.push(version);
        }
        if self.common.has_output() {
            flags.push(
                FlagSpec::new("output", FlagKind::String, "Output format (json, yaml, table)")
                    .default_value("table"),
            );
            flags.push(
                FlagSpec::new(
                    "jmes_query",
                    FlagKind::String,
                    "JMESPath query applied to the result before formatting",
                )
                .short('q'),
            );
        }
        if self.returns == ReturnKind::Binary {
            flags.push(
                FlagSpec::new(
                    "output_file",
                    FlagKind::OutputPath,
                    "File the downloaded content is written to",
                )
                .required(),
            );
        }
        flags
    }

    /// Names of all required flags, common suffix included
    pub fn required_flags(&self) -> Vec<&'static str> {
        self.effective_flags()
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect()
    }
}

/// Declarative description of one service command
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSpec {
    pub id: &'static str,
    pub aliases: &'static [&'static str],
    pub short_help: &'static str,
    pub long_help: Option<&'static str>,
    /// Environment lookup key for the credential provider
    pub auth_key: &'static str,
    pub default_url: &'static str,
    pub operations: Vec<OperationSpec>,
}

impl ServiceSpec {
    /// Look up an operation by verb or alias
    pub fn operation(&self, name: &str) -> Option<&OperationSpec> {
        self.operations
            .iter()
            .find(|op| op.verb == name || op.aliases.contains(&name))
    }
}

/// The immutable in-process description of all services and operations
#[derive(Debug, Default)]
pub struct Registry {
    services: Vec<ServiceSpec>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service.
    ///
    /// Idempotent for a value-identical re-registration; a conflicting
    /// definition under an existing id is fatal, as is any structural
    /// violation in the service's operations or flags.
    pub fn register(&mut self, service: ServiceSpec) -> CliResult<()> {
        if let Some(existing) = self.services.iter().find(|s| s.id == service.id) {
            if *existing == service {
                return Ok(());
            }
            return Err(CliError::Config(format!(
                "Service '{}' registered twice with conflicting definitions",
                service.id
            )));
        }

        self.validate(&service)?;
        self.services.push(service);
        Ok(())
    }

    fn validate(&self, service: &ServiceSpec) -> CliResult<()> {
        for existing in &self.services {
            if existing.auth_key == service.auth_key {
                return Err(CliError::Config(format!(
                    "Auth key '{}' is used by both '{}' and '{}'",
                    service.auth_key, existing.id, service.id
                )));
            }
            let mut names = vec![existing.id];
            names.extend(existing.aliases);
            if names.contains(&service.id)
                || service.aliases.iter().any(|a| names.contains(a))
            {
                return Err(CliError::Config(format!(
                    "Service name or alias of '{}' collides with '{}'",
                    service.id, existing.id
                )));
            }
        }

        let mut verbs: Vec<&str> = Vec::new();
        for op in &service.operations {
            if verbs.contains(&op.verb) || op.aliases.iter().any(|a| verbs.contains(a)) {
                return Err(CliError::Config(format!(
                    "Duplicate operation name in service '{}': {}",
                    service.id, op.verb
                )));
            }
            verbs.push(op.verb);
            verbs.extend(op.aliases);
            Self::validate_operation(service.id, op)?;
        }
        Ok(())
    }

    fn validate_operation(service_id: &str, op: &OperationSpec) -> CliResult<()> {
        let mut names: Vec<&str> = Vec::new();
        for flag in &op.flags {
            if RESERVED_FLAGS.contains(&flag.name) {
                return Err(CliError::Config(format!(
                    "Operation '{} {}' declares reserved flag --{}",
                    service_id, op.verb, flag.name
                )));
            }
            if names.contains(&flag.name) {
                return Err(CliError::Config(format!(
                    "Operation '{} {}' declares flag --{} twice",
                    service_id, op.verb, flag.name
                )));
            }
            if flag.required && flag.default.is_some() {
                return Err(CliError::Config(format!(
                    "Required flag --{} of '{} {}' must not carry a default",
                    flag.name, service_id, op.verb
                )));
            }
            names.push(flag.name);
        }
        if op.version_required && !op.common.has_version() {
            return Err(CliError::Config(format!(
                "Operation '{} {}' requires a version but has no version flag",
                service_id, op.verb
            )));
        }
        Ok(())
    }

    /// Look up a service by id or alias
    pub fn service(&self, name: &str) -> Option<&ServiceSpec> {
        self.services
            .iter()
            .find(|s| s.id == name || s.aliases.contains(&name))
    }

    /// All services in registration order
    pub fn services(&self) -> &[ServiceSpec] {
        &self.services
    }

    /// Flat traversal of the tree: every service, then each of its
    /// operations, in declaration order. Suitable for descriptor export.
    pub fn enumerate(&self) -> Vec<(&ServiceSpec, Option<&OperationSpec>)> {
        let mut entries = Vec::new();
        for service in &self.services {
            entries.push((service, None));
            for op in &service.operations {
                entries.push((service, Some(op)));
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_service(id: &'static str, auth_key: &'static str) -> ServiceSpec {
        ServiceSpec {
            id,
            aliases: &[],
            short_help: "sample",
            long_help: None,
            auth_key,
            default_url: "https://example.test/api",
            operations: vec![OperationSpec::new("ping", "Ping", Handler::NlcListClassifiers)
                .common(CommonFlags::Output)],
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = Registry::new();
        registry.register(sample_service("svc-a", "svc_a")).unwrap();
        assert!(registry.service("svc-a").is_some());
        assert!(registry.service("svc-b").is_none());
    }

    #[test]
    fn test_register_identical_is_idempotent() {
        let mut registry = Registry::new();
        registry.register(sample_service("svc-a", "svc_a")).unwrap();
        registry.register(sample_service("svc-a", "svc_a")).unwrap();
        assert_eq!(registry.services().len(), 1);
    }

    #[test]
    fn test_register_conflicting_definition_fails() {
        let mut registry = Registry::new();
        registry.register(sample_service("svc-a", "svc_a")).unwrap();
        let mut conflicting = sample_service("svc-a", "svc_a");
        conflicting.short_help = "different";
        assert!(registry.register(conflicting).is_err());
    }

    #[test]
    fn test_duplicate_auth_key_fails() {
        let mut registry = Registry::new();
        registry.register(sample_service("svc-a", "shared")).unwrap();
        assert!(registry.register(sample_service("svc-b", "shared")).is_err());
    }

    #[test]
    fn test_alias_collision_fails() {
        let mut registry = Registry::new();
        registry.register(sample_service("svc-a", "svc_a")).unwrap();
        let mut service = sample_service("svc-b", "svc_b");
        service.aliases = &["svc-a"];
        assert!(registry.register(service).is_err());
    }

    #[test]
    fn test_reserved_flag_rejected() {
        let mut registry = Registry::new();
        let mut service = sample_service("svc-a", "svc_a");
        service.operations[0] = service.operations[0].clone().flag(FlagSpec::new(
            "output",
            FlagKind::String,
            "clashes",
        ));
        assert!(registry.register(service).is_err());
    }

    #[test]
    fn test_duplicate_flag_rejected() {
        let mut registry = Registry::new();
        let mut service = sample_service("svc-a", "svc_a");
        service.operations[0] = service.operations[0]
            .clone()
            .flag(FlagSpec::new("text", FlagKind::String, "first"))
            .flag(FlagSpec::new("text", FlagKind::String, "second"));
        assert!(registry.register(service).is_err());
    }

    #[test]
    fn test_required_flag_with_default_rejected() {
        let mut registry = Registry::new();
        let mut service = sample_service("svc-a", "svc_a");
        service.operations[0] = service.operations[0].clone().flag(
            FlagSpec::new("text", FlagKind::String, "bad")
                .required()
                .default_value("x"),
        );
        assert!(registry.register(service).is_err());
    }

    #[test]
    fn test_effective_flags_appends_common_suffix() {
        let op = OperationSpec::new("get", "Get", Handler::NlcListClassifiers)
            .flag(FlagSpec::new("model_id", FlagKind::String, "Model id").required())
            .common(CommonFlags::VersionedOutput)
            .version_required();
        let names: Vec<&str> = op.effective_flags().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["model_id", "version", "output", "jmes_query"]);
    }

    #[test]
    fn test_effective_flags_binary_appends_output_file() {
        let op = OperationSpec::new("fetch", "Fetch", Handler::NlcListClassifiers)
            .common(CommonFlags::Output)
            .returns(ReturnKind::Binary);
        let flags = op.effective_flags();
        let last = flags.last().unwrap();
        assert_eq!(last.name, "output_file");
        assert!(last.required);
        assert_eq!(last.kind, FlagKind::OutputPath);
    }

    #[test]
    fn test_required_flags_includes_version_when_required() {
        let op = OperationSpec::new("get", "Get", Handler::NlcListClassifiers)
            .flag(FlagSpec::new("model_id", FlagKind::String, "Model id").required())
            .common(CommonFlags::VersionedOutput)
            .version_required();
        assert_eq!(op.required_flags(), vec!["model_id", "version"]);
    }

    #[test]
    fn test_enumerate_order_is_declaration_order() {
        let mut registry = Registry::new();
        registry.register(sample_service("svc-a", "svc_a")).unwrap();
        registry.register(sample_service("svc-b", "svc_b")).unwrap();
        let entries = registry.enumerate();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].0.id, "svc-a");
        assert!(entries[0].1.is_none());
        assert_eq!(entries[1].1.unwrap().verb, "ping");
        assert_eq!(entries[2].0.id, "svc-b");
    }
}
