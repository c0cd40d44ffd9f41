//! Configuration for building an extraction context.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use pathcat_types::S3ModelVersion;

use crate::context::ExtractionContext;
use crate::nameservice::NameServiceMap;

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "primary";

/// Extractor settings, usually read from a config file section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Metadata namespace appended to every qualified name.
    pub namespace: String,
    /// Fold HDFS paths to lower case.
    pub lower_case: bool,
    /// S3 entity model.
    pub s3_model_version: S3ModelVersion,
    /// HDFS name service id -> namenode `host:port` addresses.
    pub name_services: BTreeMap<String, Vec<String>>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            lower_case: false,
            s3_model_version: S3ModelVersion::V1,
            name_services: BTreeMap::new(),
        }
    }
}

impl ExtractorConfig {
    /// Create a configuration for the given namespace.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    pub fn with_lower_case(mut self, lower_case: bool) -> Self {
        self.lower_case = lower_case;
        self
    }

    pub fn with_s3_model_version(mut self, version: S3ModelVersion) -> Self {
        self.s3_model_version = version;
        self
    }

    /// Build a fresh context with an empty cache.
    pub fn to_context(&self) -> ExtractionContext {
        let mut name_services = NameServiceMap::new();
        for (id, addresses) in &self.name_services {
            name_services.insert(id.clone(), addresses);
        }
        ExtractionContext::new(self.namespace.clone())
            .with_lower_case(self.lower_case)
            .with_s3_model_version(self.s3_model_version)
            .with_name_services(name_services)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractorConfig::default();
        assert_eq!(config.namespace, DEFAULT_NAMESPACE);
        assert!(!config.lower_case);
        assert_eq!(config.s3_model_version, S3ModelVersion::V1);
    }

    #[test]
    fn test_to_context() {
        let mut config = ExtractorConfig::new("metaspace")
            .with_lower_case(true)
            .with_s3_model_version(S3ModelVersion::V2);
        config
            .name_services
            .insert("ns1".to_string(), vec!["nn1:8020".to_string()]);

        let ctx = config.to_context();
        assert_eq!(ctx.namespace(), "metaspace");
        assert!(ctx.is_lower_case());
        assert_eq!(ctx.s3_model_version(), S3ModelVersion::V2);
        assert_eq!(ctx.name_services().resolve("nn1:8020").map(|m| m.id), Some("ns1"));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ExtractorConfig =
            serde_json::from_str(r#"{"namespace":"cl1","s3_model_version":"v2"}"#).unwrap();
        assert_eq!(config.namespace, "cl1");
        assert_eq!(config.s3_model_version, S3ModelVersion::V2);
        assert!(!config.lower_case);
    }
}
