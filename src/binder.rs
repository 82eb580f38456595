//! Flag binder
//!
//! Translates the flags the user actually supplied into typed values, without
//! ever treating a parser default as user intent. The binder consults the
//! parser's value source, not the current value: a flag bound here was seen
//! on the command line, and a flag absent here was not, even if it carries a
//! default or its type's zero value. The remote services distinguish unset
//! fields from explicit zeroes, so this distinction is load-bearing.

use std::path::{Path, PathBuf};

use clap::parser::ValueSource;
use clap::ArgMatches;

use crate::error::{CliError, CliResult};
use crate::registry::{FlagKind, OperationSpec, RESERVED_FLAGS};

/// An upload file opened at bind time.
///
/// The bytes are read up front so that a failing path aborts the invocation
/// before anything is attached to a request, and no handle outlives the bind
/// step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub path: PathBuf,
    pub file_name: String,
    pub data: Vec<u8>,
}

impl FileUpload {
    fn open(path: &Path) -> CliResult<Self> {
        let data = std::fs::read(path)
            .map_err(|e| CliError::Io(format!("Cannot open '{}': {}", path.display(), e)))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            data,
        })
    }
}

/// A decoded flag value
#[derive(Debug, Clone, PartialEq)]
pub enum BoundValue {
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    List(Vec<String>),
    Json(serde_json::Value),
    JsonArray(Vec<serde_json::Value>),
    Upload(FileUpload),
    /// Keyed uploads, one entry per key of the supplied JSON object
    Uploads(Vec<(String, FileUpload)>),
    OutPath(PathBuf),
}

/// The ordered set of flags the user supplied, with decoded values.
///
/// Iteration order is the operation's declared flag order. A name is present
/// here if and only if the dispatcher observed it on the command line.
#[derive(Debug, Default, PartialEq)]
pub struct BoundFlags {
    values: Vec<(&'static str, BoundValue)>,
}

impl BoundFlags {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.values.iter().any(|(n, _)| *n == name)
    }

    /// Names of all bound flags, in bind order
    pub fn set_names(&self) -> Vec<&'static str> {
        self.values.iter().map(|(n, _)| *n).collect()
    }

    /// Remove and return the value for `name` if it was bound with the kind
    /// `matcher` accepts. A wrong-kind access leaves the value in place.
    fn take_if<T>(&mut self, name: &str, matcher: impl Fn(BoundValue) -> Result<T, BoundValue>) -> Option<T> {
        let index = self.values.iter().position(|(n, _)| *n == name)?;
        let (flag, value) = self.values.remove(index);
        match matcher(value) {
            Ok(v) => Some(v),
            Err(value) => {
                self.values.insert(index, (flag, value));
                None
            }
        }
    }

    pub fn take_string(&mut self, name: &str) -> Option<String> {
        self.take_if(name, |v| match v {
            BoundValue::Str(s) => Ok(s),
            other => Err(other),
        })
    }

    pub fn take_bool(&mut self, name: &str) -> Option<bool> {
        self.take_if(name, |v| match v {
            BoundValue::Bool(b) => Ok(b),
            other => Err(other),
        })
    }

    pub fn take_int(&mut self, name: &str) -> Option<i64> {
        self.take_if(name, |v| match v {
            BoundValue::Int(i) => Ok(i),
            other => Err(other),
        })
    }

    pub fn take_float(&mut self, name: &str) -> Option<f64> {
        self.take_if(name, |v| match v {
            BoundValue::Float(f) => Ok(f),
            other => Err(other),
        })
    }

    pub fn take_list(&mut self, name: &str) -> Option<Vec<String>> {
        self.take_if(name, |v| match v {
            BoundValue::List(l) => Ok(l),
            other => Err(other),
        })
    }

    pub fn take_json(&mut self, name: &str) -> Option<serde_json::Value> {
        self.take_if(name, |v| match v {
            BoundValue::Json(j) => Ok(j),
            other => Err(other),
        })
    }

    pub fn take_json_array(&mut self, name: &str) -> Option<Vec<serde_json::Value>> {
        self.take_if(name, |v| match v {
            BoundValue::JsonArray(a) => Ok(a),
            other => Err(other),
        })
    }

    pub fn take_upload(&mut self, name: &str) -> Option<FileUpload> {
        self.take_if(name, |v| match v {
            BoundValue::Upload(u) => Ok(u),
            other => Err(other),
        })
    }

    pub fn take_uploads(&mut self, name: &str) -> Option<Vec<(String, FileUpload)>> {
        self.take_if(name, |v| match v {
            BoundValue::Uploads(u) => Ok(u),
            other => Err(other),
        })
    }
}

/// Bind the user-supplied flags of one operation.
///
/// Visits the operation's flags in declared order and binds exactly those the
/// parser saw on the command line. Reserved flags are consumed by the
/// dispatcher and never appear in the result.
pub fn bind(op: &OperationSpec, matches: &ArgMatches) -> CliResult<BoundFlags> {
    let mut bound = BoundFlags::default();

    for spec in op.effective_flags() {
        if RESERVED_FLAGS.contains(&spec.name) {
            continue;
        }
        if matches.value_source(spec.name) != Some(ValueSource::CommandLine) {
            continue;
        }
        let value = decode(&spec, matches)?;
        bound.values.push((spec.name, value));
    }

    Ok(bound)
}

fn decode(spec: &crate::registry::FlagSpec, matches: &ArgMatches) -> CliResult<BoundValue> {
    let missing = || CliError::Render(format!("Parser lost value for --{}", spec.name));

    match spec.kind {
        FlagKind::String => matches
            .get_one::<String>(spec.name)
            .cloned()
            .map(BoundValue::Str)
            .ok_or_else(missing),
        FlagKind::Bool => matches
            .get_one::<bool>(spec.name)
            .copied()
            .map(BoundValue::Bool)
            .ok_or_else(missing),
        FlagKind::Int => matches
            .get_one::<i64>(spec.name)
            .copied()
            .map(BoundValue::Int)
            .ok_or_else(missing),
        FlagKind::Float => matches
            .get_one::<f64>(spec.name)
            .copied()
            .map(BoundValue::Float)
            .ok_or_else(missing),
        FlagKind::StringList => matches
            .get_many::<String>(spec.name)
            .map(|vals| BoundValue::List(vals.cloned().collect()))
            .ok_or_else(missing),
        FlagKind::JsonObject => {
            let raw = matches.get_one::<String>(spec.name).ok_or_else(missing)?;
            Ok(BoundValue::Json(parse_json_object(spec.name, raw)?))
        }
        FlagKind::JsonArray => {
            let raw = matches.get_one::<String>(spec.name).ok_or_else(missing)?;
            Ok(BoundValue::JsonArray(parse_json_array(spec.name, raw)?))
        }
        FlagKind::FilePath => {
            let path = matches.get_one::<PathBuf>(spec.name).ok_or_else(missing)?;
            Ok(BoundValue::Upload(FileUpload::open(path)?))
        }
        FlagKind::KeyedUpload => {
            let raw = matches.get_one::<String>(spec.name).ok_or_else(missing)?;
            Ok(BoundValue::Uploads(open_keyed_uploads(spec.name, raw)?))
        }
        FlagKind::OutputPath => matches
            .get_one::<PathBuf>(spec.name)
            .cloned()
            .map(BoundValue::OutPath)
            .ok_or_else(missing),
    }
}

fn parse_json_object(flag: &str, raw: &str) -> CliResult<serde_json::Value> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| CliError::Decode {
        flag: flag.to_string(),
        details: e.to_string(),
    })?;
    if !value.is_object() {
        return Err(CliError::Decode {
            flag: flag.to_string(),
            details: "expected a JSON object".to_string(),
        });
    }
    Ok(value)
}

fn parse_json_array(flag: &str, raw: &str) -> CliResult<Vec<serde_json::Value>> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| CliError::Decode {
        flag: flag.to_string(),
        details: e.to_string(),
    })?;
    match value {
        serde_json::Value::Array(items) => Ok(items),
        _ => Err(CliError::Decode {
            flag: flag.to_string(),
            details: "expected a JSON array".to_string(),
        }),
    }
}

/// Decode a key-to-path JSON object and open every referenced file.
///
/// All files are opened before any entry is returned, so a single unreadable
/// path fails the whole flag and nothing is partially attached.
fn open_keyed_uploads(flag: &str, raw: &str) -> CliResult<Vec<(String, FileUpload)>> {
    let value = parse_json_object(flag, raw)?;
    let map = match value {
        serde_json::Value::Object(map) => map,
        _ => unreachable!("parse_json_object returned a non-object"),
    };

    let mut uploads = Vec::with_capacity(map.len());
    for (key, entry) in map {
        let path = entry.as_str().ok_or_else(|| CliError::Decode {
            flag: flag.to_string(),
            details: format!("value for key '{}' must be a file path string", key),
        })?;
        uploads.push((key, FileUpload::open(Path::new(path))?));
    }
    Ok(uploads)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Handler;
    use crate::dispatch::operation_command;
    use crate::registry::{CommonFlags, FlagSpec, OperationSpec};
    use std::io::Write;

    fn sample_op() -> OperationSpec {
        OperationSpec::new("probe", "Probe", Handler::NlcListClassifiers)
            .flag(FlagSpec::new("text", FlagKind::String, "Text"))
            .flag(FlagSpec::new("count", FlagKind::Int, "Count"))
            .flag(FlagSpec::new("threshold", FlagKind::Float, "Threshold"))
            .flag(FlagSpec::new("enabled", FlagKind::Bool, "Enabled"))
            .flag(FlagSpec::new("tags", FlagKind::StringList, "Tags"))
            .flag(FlagSpec::new("payload", FlagKind::JsonObject, "Payload"))
            .flag(FlagSpec::new("items", FlagKind::JsonArray, "Items"))
            .common(CommonFlags::Output)
    }

    fn matches_for(op: &OperationSpec, argv: &[&str]) -> ArgMatches {
        let mut full = vec!["probe"];
        full.extend_from_slice(argv);
        operation_command(op).try_get_matches_from(full).unwrap()
    }

    #[test]
    fn test_unset_flags_are_not_bound() {
        let op = sample_op();
        let matches = matches_for(&op, &["--text", "hello"]);
        let bound = bind(&op, &matches).unwrap();
        assert_eq!(bound.set_names(), vec!["text"]);
        assert!(!bound.is_set("count"));
        assert!(!bound.is_set("enabled"));
    }

    #[test]
    fn test_explicit_zero_is_bound() {
        let op = sample_op();
        let matches = matches_for(&op, &["--count", "0", "--enabled=false"]);
        let mut bound = bind(&op, &matches).unwrap();
        assert_eq!(bound.take_int("count"), Some(0));
        assert_eq!(bound.take_bool("enabled"), Some(false));
    }

    #[test]
    fn test_bare_bool_binds_true() {
        let op = sample_op();
        let matches = matches_for(&op, &["--enabled"]);
        let mut bound = bind(&op, &matches).unwrap();
        assert_eq!(bound.take_bool("enabled"), Some(true));
    }

    #[test]
    fn test_default_valued_output_flag_is_never_bound() {
        let op = sample_op();
        let matches = matches_for(&op, &["--text", "hi", "--output", "json"]);
        let bound = bind(&op, &matches).unwrap();
        // Reserved flags belong to the dispatcher even when explicitly set.
        assert!(!bound.is_set("output"));
        assert_eq!(bound.set_names(), vec!["text"]);
    }

    #[test]
    fn test_float_and_list_binding() {
        let op = sample_op();
        let matches = matches_for(&op, &["--threshold", "0.5", "--tags", "a,b,c"]);
        let mut bound = bind(&op, &matches).unwrap();
        assert_eq!(bound.take_float("threshold"), Some(0.5));
        assert_eq!(
            bound.take_list("tags"),
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn test_json_object_round_trip() {
        let op = sample_op();
        let matches = matches_for(&op, &["--payload", r#"{"k":"v"}"#]);
        let mut bound = bind(&op, &matches).unwrap();
        let value = bound.take_json("payload").unwrap();
        assert_eq!(value, serde_json::json!({"k": "v"}));
    }

    #[test]
    fn test_malformed_json_object_is_decode_error() {
        let op = sample_op();
        let matches = matches_for(&op, &["--payload", "{not json"]);
        let err = bind(&op, &matches).unwrap_err();
        assert!(matches!(err, CliError::Decode { ref flag, .. } if flag == "payload"));
    }

    #[test]
    fn test_json_object_rejects_array() {
        let op = sample_op();
        let matches = matches_for(&op, &["--payload", "[1,2]"]);
        let err = bind(&op, &matches).unwrap_err();
        assert!(matches!(err, CliError::Decode { .. }));
    }

    #[test]
    fn test_json_array_binding() {
        let op = sample_op();
        let matches = matches_for(&op, &["--items", r#"[{"a":1},{"a":2}]"#]);
        let mut bound = bind(&op, &matches).unwrap();
        let items = bound.take_json_array("items").unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_json_array_rejects_object() {
        let op = sample_op();
        let matches = matches_for(&op, &["--items", r#"{"a":1}"#]);
        assert!(bind(&op, &matches).is_err());
    }

    #[test]
    fn test_last_value_wins_on_repeated_flag() {
        let op = sample_op();
        let matches = matches_for(&op, &["--text", "first", "--text", "second"]);
        let mut bound = bind(&op, &matches).unwrap();
        assert_eq!(bound.take_string("text"), Some("second".to_string()));
    }

    #[test]
    fn test_file_upload_binding() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"audio-bytes").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let op = OperationSpec::new("up", "Upload", Handler::NlcListClassifiers)
            .flag(FlagSpec::new("audio", FlagKind::FilePath, "Audio file"));
        let matches = operation_command(&op)
            .try_get_matches_from(["up", "--audio", path.as_str()])
            .unwrap();
        let mut bound = bind(&op, &matches).unwrap();
        let upload = bound.take_upload("audio").unwrap();
        assert_eq!(upload.data, b"audio-bytes");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let op = OperationSpec::new("up", "Upload", Handler::NlcListClassifiers)
            .flag(FlagSpec::new("audio", FlagKind::FilePath, "Audio file"));
        let matches = operation_command(&op)
            .try_get_matches_from(["up", "--audio", "/no/such/file.wav"])
            .unwrap();
        let err = bind(&op, &matches).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
        assert!(err.to_string().contains("/no/such/file.wav"));
    }

    #[test]
    fn test_keyed_upload_binding() {
        let mut dogs = tempfile::NamedTempFile::new().unwrap();
        dogs.write_all(b"dog-data").unwrap();
        let mut cats = tempfile::NamedTempFile::new().unwrap();
        cats.write_all(b"cat-data").unwrap();

        let raw = format!(
            r#"{{"cats":"{}","dogs":"{}"}}"#,
            cats.path().display(),
            dogs.path().display()
        );
        let op = OperationSpec::new("train", "Train", Handler::NlcListClassifiers)
            .flag(FlagSpec::new("positive_examples", FlagKind::KeyedUpload, "Examples"));
        let matches = operation_command(&op)
            .try_get_matches_from(["train", "--positive_examples", raw.as_str()])
            .unwrap();
        let mut bound = bind(&op, &matches).unwrap();
        let uploads = bound.take_uploads("positive_examples").unwrap();
        assert_eq!(uploads.len(), 2);
        assert_eq!(uploads[0].0, "cats");
        assert_eq!(uploads[0].1.data, b"cat-data");
    }

    #[test]
    fn test_keyed_upload_unreadable_path_is_atomic_io_error() {
        let mut good = tempfile::NamedTempFile::new().unwrap();
        good.write_all(b"ok").unwrap();

        let raw = format!(
            r#"{{"a":"{}","b":"/no/such/file.zip"}}"#,
            good.path().display()
        );
        let op = OperationSpec::new("train", "Train", Handler::NlcListClassifiers)
            .flag(FlagSpec::new("positive_examples", FlagKind::KeyedUpload, "Examples"));
        let matches = operation_command(&op)
            .try_get_matches_from(["train", "--positive_examples", raw.as_str()])
            .unwrap();
        let err = bind(&op, &matches).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_keyed_upload_non_string_value_is_decode_error() {
        let op = OperationSpec::new("train", "Train", Handler::NlcListClassifiers)
            .flag(FlagSpec::new("positive_examples", FlagKind::KeyedUpload, "Examples"));
        let matches = operation_command(&op)
            .try_get_matches_from(["train", "--positive_examples", r#"{"a":42}"#])
            .unwrap();
        let err = bind(&op, &matches).unwrap_err();
        assert!(matches!(err, CliError::Decode { .. }));
    }

    #[test]
    fn test_take_wrong_kind_returns_none_and_keeps_value() {
        let op = sample_op();
        let matches = matches_for(&op, &["--text", "hello"]);
        let mut bound = bind(&op, &matches).unwrap();
        assert_eq!(bound.take_int("text"), None);
        assert_eq!(bound.take_string("text"), Some("hello".to_string()));
    }
}
