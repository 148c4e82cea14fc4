use crate::conf::ConfigError;
use crate::runtime::FeatureFlags;
use crate::transform::{Operation, PathTransformer};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// One operation tag as configuration spells it.
///
/// Tags this build does not recognize decode to `Unspecified` and drop out
/// at pipeline construction, so rolling a config forward to a newer tag does
/// not break binaries that predate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationConfig {
    #[serde(rename = "normalize_path_rfc_3986")]
    NormalizePathRfc3986,
    MergeSlashes,
    Unspecified,
}

// Hand-rolled so unknown tags degrade to Unspecified instead of failing the
// whole profile.
impl<'de> Deserialize<'de> for OperationConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;

        Ok(match tag.as_str() {
            "normalize_path_rfc_3986" => OperationConfig::NormalizePathRfc3986,
            "merge_slashes" => OperationConfig::MergeSlashes,
            _ => OperationConfig::Unspecified,
        })
    }
}

/// An ordered transformation list, as a route or listener config embeds it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransformProfile {
    #[serde(default)]
    pub operations: Vec<OperationConfig>,
}

impl TransformProfile {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let profile = serde_yaml::from_str(s)?;
        Ok(profile)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        serde_yaml::from_str(&s).map_err(|e| ConfigError::parse(path, e))
    }

    /// The recognized operations in configured order, unknown tags dropped.
    pub fn operations(&self) -> impl Iterator<Item = Operation> + '_ {
        self.operations.iter().filter_map(|op| match op {
            OperationConfig::NormalizePathRfc3986 => Some(Operation::NormalizePathRfc3986),
            OperationConfig::MergeSlashes => Some(Operation::MergeSlashes),
            OperationConfig::Unspecified => None,
        })
    }

    /// Builds the transformer this profile describes.
    pub fn build_transformer(&self, flags: Arc<FeatureFlags>) -> PathTransformer {
        PathTransformer::new(self.operations(), flags)
    }
}
