//! Dispatcher
//!
//! Materializes the clap command tree from the registry, parses the argument
//! vector, and drives the invocation pipeline for the matched operation:
//! resolve the authenticator, consume the reserved flags into the context,
//! bind the user-set flags, call the handler, and render per the operation's
//! declared return kind. All failures flow to the single error gate in main.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgAction, Command};

use crate::auth;
use crate::binder;
use crate::commands::{self, Outcome};
use crate::context::InvocationContext;
use crate::error::{CliError, CliResult};
use crate::logging::{self, LogLevel};
use crate::output::{print_info, print_success};
use crate::plugin;
use crate::registry::{FlagKind, FlagSpec, OperationSpec, Registry, ReturnKind, ServiceSpec};
use crate::render::{self, OutputFormat};
use crate::verbose;

/// Build the full command tree from the registry
pub fn build_cli(registry: &Registry) -> Command {
    let mut root = Command::new(crate::BIN_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Command-line client for the Cirrus Cognitive Cloud services")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print HTTP diagnostics to stderr"),
        )
        .subcommand(
            Command::new("plugin-manifest")
                .about("Print plugin command descriptors for a host shell as JSON"),
        );

    for service in registry.services() {
        root = root.subcommand(service_command(service));
    }
    root
}

fn service_command(service: &ServiceSpec) -> Command {
    let mut cmd = Command::new(service.id)
        .about(service.short_help)
        .subcommand_required(true)
        .arg_required_else_help(true);
    if let Some(long) = service.long_help {
        cmd = cmd.long_about(long);
    }
    for alias in service.aliases {
        cmd = cmd.visible_alias(*alias);
    }
    for op in &service.operations {
        cmd = cmd.subcommand(operation_command(op));
    }
    cmd
}

/// Build the clap command for a single operation
pub fn operation_command(op: &OperationSpec) -> Command {
    let mut cmd = Command::new(op.verb).about(op.short_help);
    if let Some(long) = op.long_help {
        cmd = cmd.long_about(long);
    }
    for alias in op.aliases {
        cmd = cmd.visible_alias(*alias);
    }
    for spec in op.effective_flags() {
        cmd = cmd.arg(flag_arg(&spec));
    }
    cmd
}

fn flag_arg(spec: &FlagSpec) -> Arg {
    let mut arg = Arg::new(spec.name).long(spec.name).help(spec.help);
    if let Some(short) = spec.short {
        arg = arg.short(short);
    }
    if spec.required {
        arg = arg.required(true);
    }
    if let Some(default) = spec.default {
        arg = arg.default_value(default);
    }

    // Reserved flags carry fixed parsers regardless of their declared kind.
    match spec.name {
        "version" => {
            return arg
                .value_name("YYYY-MM-DD")
                .value_parser(parse_api_version)
                .overrides_with(spec.name);
        }
        "output" => {
            return arg
                .value_name("FORMAT")
                .value_parser(value_parser!(OutputFormat))
                .overrides_with(spec.name);
        }
        _ => {}
    }

    match spec.kind {
        FlagKind::String => arg.overrides_with(spec.name),
        FlagKind::Bool => arg
            .value_parser(value_parser!(bool))
            .num_args(0..=1)
            .default_missing_value("true")
            .overrides_with(spec.name),
        FlagKind::Int => arg
            .value_parser(value_parser!(i64))
            .overrides_with(spec.name),
        FlagKind::Float => arg
            .value_parser(value_parser!(f64))
            .overrides_with(spec.name),
        FlagKind::StringList => arg.action(ArgAction::Append).value_delimiter(','),
        FlagKind::JsonObject | FlagKind::JsonArray | FlagKind::KeyedUpload => {
            arg.value_name("JSON").overrides_with(spec.name)
        }
        FlagKind::FilePath | FlagKind::OutputPath => arg
            .value_name("PATH")
            .value_parser(value_parser!(PathBuf))
            .overrides_with(spec.name),
    }
}

/// Validate an API version date (YYYY-MM-DD)
fn parse_api_version(value: &str) -> Result<String, String> {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| value.to_string())
        .map_err(|_| format!("'{}' is not an API version date (expected YYYY-MM-DD)", value))
}

/// Parse the argument vector and run the matched operation
pub async fn run<I, T>(registry: &Registry, argv: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match build_cli(registry).try_get_matches_from(argv) {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return Ok(());
        }
        Err(e) => return Err(CliError::Usage(e.render().to_string())),
    };

    logging::init_global_logger(LogLevel::from_flags_and_env(matches.get_flag("debug")));

    let (service_name, service_matches) = matches
        .subcommand()
        .ok_or_else(|| CliError::Usage("No command given".to_string()))?;

    if service_name == "plugin-manifest" {
        let descriptors = plugin::export(registry);
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
        return Ok(());
    }

    let service = registry
        .service(service_name)
        .ok_or_else(|| CliError::Usage(format!("Unknown service '{}'", service_name)))?;
    let (verb, op_matches) = service_matches
        .subcommand()
        .ok_or_else(|| CliError::Usage(format!("No operation given for '{}'", service.id)))?;
    let op = service
        .operation(verb)
        .ok_or_else(|| CliError::Usage(format!("Unknown operation '{} {}'", service.id, verb)))?;

    verbose!("Selected {} {}", service.id, op.verb);

    // Authenticator resolution happens at service construction time and is
    // fatal before any flag is bound.
    let authenticator = auth::resolve(service.auth_key)?;
    let endpoint = auth::endpoint_override(service.auth_key)
        .unwrap_or_else(|| service.default_url.to_string());

    let version = if op.common.has_version() {
        op_matches.get_one::<String>("version").cloned()
    } else {
        None
    };
    let output = if op.common.has_output() {
        op_matches
            .get_one::<OutputFormat>("output")
            .copied()
            .unwrap_or_default()
    } else {
        OutputFormat::default()
    };
    let jmes_query = if op.common.has_output() {
        op_matches.get_one::<String>("jmes_query").cloned()
    } else {
        None
    };
    let output_file = if op.returns == ReturnKind::Binary {
        op_matches.get_one::<PathBuf>("output_file").cloned()
    } else {
        None
    };

    let flags = binder::bind(op, op_matches)?;
    verbose!("Bound {} user-set flag(s)", flags.len());

    let mut ctx = InvocationContext {
        flags,
        authenticator,
        endpoint,
        version,
        output,
        jmes_query,
        output_file,
    };

    let outcome = commands::run(op.handler, &mut ctx).await?;
    finish(op, &ctx, outcome)
}

/// Render the handler's outcome per the operation's declared return kind
fn finish(op: &OperationSpec, ctx: &InvocationContext, outcome: Outcome) -> CliResult<()> {
    match (op.returns, outcome) {
        (_, Outcome::Cancelled) => {
            print_info("Cancelled.");
            Ok(())
        }
        (ReturnKind::Value, Outcome::Value(value)) => {
            let rendered = render::render_value(&value, ctx.output, ctx.jmes_query.as_deref())?;
            println!("{}", rendered);
            Ok(())
        }
        (ReturnKind::Ack, Outcome::Ack) => {
            print_success("OK");
            Ok(())
        }
        (ReturnKind::Binary, Outcome::Binary(data)) => {
            let path = ctx
                .output_file
                .as_ref()
                .ok_or_else(|| CliError::Render("No output file was bound".to_string()))?;
            render::write_binary(&data, path)?;
            print_success(&format!("Saved to {}", path.display()));
            Ok(())
        }
        (_, _) => Err(CliError::Render(format!(
            "Operation '{}' returned a result inconsistent with its declared kind",
            op.verb
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    fn registry() -> Registry {
        Registry::standard().unwrap()
    }

    fn render_help(cmd: &Command, path: &[&str]) -> String {
        let mut cmd = cmd.clone();
        for name in path {
            let next = cmd
                .get_subcommands()
                .find(|c| c.get_name() == *name)
                .cloned()
                .unwrap();
            cmd = next;
        }
        cmd.render_long_help().to_string()
    }

    #[test]
    fn test_tree_contains_all_services() {
        let registry = registry();
        let cli = build_cli(&registry);
        for service in registry.services() {
            assert!(
                cli.get_subcommands().any(|c| c.get_name() == service.id),
                "missing service command {}",
                service.id
            );
        }
    }

    #[test]
    fn test_missing_required_flag_is_parse_error() {
        let registry = registry();
        let result = build_cli(&registry).try_get_matches_from([
            "cirrus",
            "assistant-v1",
            "message",
            "--version",
            "2020-01-01",
        ]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_operation_is_parse_error() {
        let registry = registry();
        let result =
            build_cli(&registry).try_get_matches_from(["cirrus", "assistant-v1", "frobnicate"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_version_date_is_parse_error() {
        let registry = registry();
        let result = build_cli(&registry).try_get_matches_from([
            "cirrus",
            "nlu-v1",
            "list-models",
            "--version",
            "March-2020",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_well_formed_version_date_parses() {
        let registry = registry();
        let result = build_cli(&registry).try_get_matches_from([
            "cirrus",
            "nlu-v1",
            "list-models",
            "--version",
            "2020-01-01",
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_service_alias_resolves_to_same_operations() {
        let registry = registry();
        let by_id = build_cli(&registry)
            .try_get_matches_from(["cirrus", "nlc-v1", "list-classifiers"])
            .unwrap();
        let by_alias = build_cli(&registry)
            .try_get_matches_from(["cirrus", "natural-language-classifier", "list-classifiers"])
            .unwrap();
        // clap resolves aliases to the canonical command name.
        assert_eq!(by_id.subcommand_name(), Some("nlc-v1"));
        assert_eq!(by_alias.subcommand_name(), Some("nlc-v1"));
    }

    #[test]
    fn test_every_alias_reaches_every_operation() {
        let registry = registry();
        for service in registry.services() {
            for alias in service.aliases {
                for op in &service.operations {
                    let mut argv = vec!["cirrus", alias, op.verb, "--help"];
                    let err = build_cli(&registry)
                        .try_get_matches_from(argv.drain(..))
                        .unwrap_err();
                    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
                }
            }
        }
    }

    #[test]
    fn test_help_output_is_deterministic() {
        let registry = registry();
        let first = build_cli(&registry);
        let second = build_cli(&registry);
        assert_eq!(render_help(&first, &[]), render_help(&second, &[]));
        assert_eq!(
            render_help(&first, &["assistant-v1"]),
            render_help(&second, &["assistant-v1"])
        );
        assert_eq!(
            render_help(&first, &["assistant-v1", "message"]),
            render_help(&second, &["assistant-v1", "message"])
        );
    }

    #[test]
    fn test_enumerate_is_deterministic() {
        let first = Registry::standard().unwrap();
        let second = Registry::standard().unwrap();
        let names = |r: &Registry| -> Vec<String> {
            r.enumerate()
                .iter()
                .map(|(s, o)| match o {
                    Some(op) => format!("{} {}", s.id, op.verb),
                    None => s.id.to_string(),
                })
                .collect()
        };
        assert_eq!(names(&first), names(&second));
    }

    #[tokio::test]
    async fn test_usage_error_surfaces_before_any_transport() {
        // Seed S2: required workspace_id missing; the run fails at parse
        // time with a usage error and exit code 2.
        let registry = registry();
        let err = run(
            &registry,
            ["cirrus", "assistant-v1", "message", "--version", "2020-01-01"],
        )
        .await
        .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[tokio::test]
    async fn test_unresolvable_credentials_are_config_error() {
        // No TEST-scoped env vars are set for the assistant service here, so
        // resolution fails fatally before any flag is bound.
        std::env::remove_var("ASSISTANT_APIKEY");
        std::env::remove_var("ASSISTANT_BEARER_TOKEN");
        std::env::remove_var("ASSISTANT_USERNAME");
        std::env::remove_var("ASSISTANT_PASSWORD");
        std::env::remove_var("ASSISTANT_AUTH_TYPE");
        let registry = registry();
        let err = run(
            &registry,
            [
                "cirrus",
                "assistant-v1",
                "message",
                "--workspace_id",
                "ws-1",
                "--version",
                "2020-01-01",
            ],
        )
        .await
        .unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[tokio::test]
    async fn test_keyed_upload_open_failure_is_io_error_before_transport() {
        // Seed S6: one unreadable positive example fails the whole
        // invocation with an I/O error; nothing is ever attached or sent.
        std::env::set_var("SPEECH_TO_TEXT_AUTH_TYPE", "none");
        let registry = registry();
        let mut neg = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut neg, b"zip").unwrap();
        let neg_path = neg.path().to_string_lossy().into_owned();
        let err = run(
            &registry,
            [
                "cirrus",
                "stt-v1",
                "create-classifier",
                "--positive_examples",
                r#"{"dogs":"/no/such/file"}"#,
                "--negative_examples",
                neg_path.as_str(),
            ],
        )
        .await
        .unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
        std::env::remove_var("SPEECH_TO_TEXT_AUTH_TYPE");
    }

    #[tokio::test]
    async fn test_malformed_json_flag_is_decode_error_before_transport() {
        // Seed S4 negative: a features object that fails to parse stops the
        // run at the binder with a decode error.
        std::env::set_var("NATURAL_LANGUAGE_UNDERSTANDING_AUTH_TYPE", "none");
        let registry = registry();
        let err = run(
            &registry,
            [
                "cirrus",
                "nlu-v1",
                "analyze",
                "--features",
                "{broken",
                "--text",
                "foo",
                "--version",
                "2020-01-01",
            ],
        )
        .await
        .unwrap_err();
        assert!(matches!(err, CliError::Decode { .. }));
        std::env::remove_var("NATURAL_LANGUAGE_UNDERSTANDING_AUTH_TYPE");
    }

    #[tokio::test]
    async fn test_plugin_manifest_command_succeeds() {
        let registry = registry();
        assert!(run(&registry, ["cirrus", "plugin-manifest"]).await.is_ok());
    }

    #[test]
    fn test_binary_outcome_ignores_output_and_query() {
        // Seed S5 / binary isolation: the bytes land in the file verbatim;
        // the format and projection selections play no part.
        let registry = registry();
        let op = registry
            .service("vr-v3")
            .unwrap()
            .operation("get-core-ml-model")
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.mlmodel");
        let ctx = InvocationContext {
            flags: crate::binder::BoundFlags::default(),
            authenticator: crate::auth::Authenticator::NoAuth,
            endpoint: "https://example.test/api".to_string(),
            version: Some("2018-03-19".to_string()),
            output: OutputFormat::Json,
            jmes_query: Some("classes[0]".to_string()),
            output_file: Some(path.clone()),
        };
        finish(op, &ctx, Outcome::Binary(b"\x00mlmodel\xff".to_vec())).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"\x00mlmodel\xff");
    }

    #[test]
    fn test_mismatched_outcome_is_render_error() {
        let registry = registry();
        let op = registry
            .service("assistant-v1")
            .unwrap()
            .operation("delete-workspace")
            .unwrap();
        let ctx = InvocationContext {
            flags: crate::binder::BoundFlags::default(),
            authenticator: crate::auth::Authenticator::NoAuth,
            endpoint: "https://example.test/api".to_string(),
            version: None,
            output: OutputFormat::Table,
            jmes_query: None,
            output_file: None,
        };
        let err = finish(op, &ctx, Outcome::Value(serde_json::json!({}))).unwrap_err();
        assert!(matches!(err, CliError::Render(_)));
    }

    #[test]
    fn test_parse_api_version() {
        assert!(parse_api_version("2020-01-01").is_ok());
        assert!(parse_api_version("2020-13-40").is_err());
        assert!(parse_api_version("yesterday").is_err());
    }
}
