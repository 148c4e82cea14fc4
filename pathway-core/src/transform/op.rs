use serde::{Deserialize, Serialize};

/// One path transformation step.
///
/// A pipeline applies its operations in exactly the order configuration
/// listed them. Nothing reorders or deduplicates them: `merge_slashes`
/// before `normalize_path_rfc_3986` resolves dot-segments against merged
/// slashes, after it against the original runs, and those outcomes differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Resolve the path to RFC 3986 canonical form.
    #[serde(rename = "normalize_path_rfc_3986")]
    NormalizePathRfc3986,
    /// Collapse consecutive slashes in the path.
    MergeSlashes,
}
