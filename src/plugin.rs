//! Plugin-descriptor export
//!
//! Walks the registry and produces the command records a host shell needs to
//! advertise this CLI's commands as plugins. Pure traversal: no I/O and no
//! authentication. The `plugin-manifest` root command prints the records as
//! JSON.

use serde::Serialize;

use crate::registry::{OperationSpec, Registry, ServiceSpec};
use crate::BIN_NAME;

/// One advertised command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginDescriptor {
    /// Parent command path; empty for commands directly under the root
    pub namespace: String,
    /// Flat presentation name: own name for root children, otherwise
    /// `<parent-name> <own-name>`
    pub name: String,
    pub description: String,
    pub usage: String,
    pub aliases: Vec<String>,
}

/// Export descriptors for every service and operation in the registry
pub fn export(registry: &Registry) -> Vec<PluginDescriptor> {
    registry
        .enumerate()
        .into_iter()
        .map(|(service, op)| match op {
            None => service_descriptor(service),
            Some(op) => operation_descriptor(service, op),
        })
        .collect()
}

fn service_descriptor(service: &ServiceSpec) -> PluginDescriptor {
    PluginDescriptor {
        namespace: String::new(),
        name: service.id.to_string(),
        description: service.short_help.to_string(),
        usage: format!("{} {} <operation> [flags]", BIN_NAME, service.id),
        aliases: service.aliases.iter().map(|a| a.to_string()).collect(),
    }
}

fn operation_descriptor(service: &ServiceSpec, op: &OperationSpec) -> PluginDescriptor {
    let mut usage = format!("{} {} {}", BIN_NAME, service.id, op.verb);
    for required in op.required_flags() {
        usage.push_str(&format!(" --{} <{}>", required, required));
    }
    usage.push_str(" [flags]");

    PluginDescriptor {
        namespace: service.id.to_string(),
        name: format!("{} {}", service.id, op.verb),
        description: op.short_help.to_string(),
        usage,
        aliases: op
            .aliases
            .iter()
            .map(|a| format!("{} {}", service.id, a))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    fn registry() -> Registry {
        Registry::standard().unwrap()
    }

    #[test]
    fn test_root_children_use_own_name() {
        let descriptors = export(&registry());
        let service = descriptors
            .iter()
            .find(|d| d.name == "assistant-v1")
            .unwrap();
        assert!(service.namespace.is_empty());
    }

    #[test]
    fn test_operations_use_parent_prefixed_name() {
        let descriptors = export(&registry());
        let op = descriptors
            .iter()
            .find(|d| d.name == "assistant-v1 message")
            .unwrap();
        assert_eq!(op.namespace, "assistant-v1");
    }

    #[test]
    fn test_every_command_has_a_descriptor() {
        let registry = registry();
        let descriptors = export(&registry);
        assert_eq!(descriptors.len(), registry.enumerate().len());
    }

    #[test]
    fn test_usage_lists_required_flags() {
        let descriptors = export(&registry());
        let classify = descriptors
            .iter()
            .find(|d| d.name == "nlc-v1 classify")
            .unwrap();
        assert!(classify.usage.contains("--classifier_id <classifier_id>"));
        assert!(classify.usage.contains("--text <text>"));
    }

    #[test]
    fn test_versioned_operation_usage_includes_version() {
        let descriptors = export(&registry());
        let message = descriptors
            .iter()
            .find(|d| d.name == "assistant-v1 message")
            .unwrap();
        assert!(message.usage.contains("--version <version>"));
    }

    #[test]
    fn test_service_aliases_exported() {
        let descriptors = export(&registry());
        let nlc = descriptors.iter().find(|d| d.name == "nlc-v1").unwrap();
        assert_eq!(nlc.aliases, vec!["natural-language-classifier".to_string()]);
    }

    #[test]
    fn test_export_is_deterministic() {
        let registry = registry();
        assert_eq!(export(&registry), export(&registry));
    }
}
