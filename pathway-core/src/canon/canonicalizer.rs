use crate::canon::{CanonicalizeError, legacy, rfc3986};
use crate::runtime::{FeatureFlags, RFC_3986_CANONICALIZER};

/// The canonicalizer implementations an operator can select between.
///
/// Kept as a plain enum rather than a trait object so the active selection
/// stays inspectable in logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Canonicalizer {
    /// Strict RFC 3986 resolution. Rejects what it cannot safely resolve.
    Rfc3986,
    /// Decode-once resolution kept for backward compatibility.
    Legacy,
}

impl Canonicalizer {
    /// Selects the implementation for this call from the flag store.
    ///
    /// The flag is read once per call: a reload mid-flight affects later
    /// calls, never a path halfway through canonicalization.
    pub fn from_runtime(flags: &FeatureFlags) -> Self {
        if flags.is_enabled(RFC_3986_CANONICALIZER) {
            Canonicalizer::Rfc3986
        } else {
            Canonicalizer::Legacy
        }
    }

    /// Canonicalizes a path (query already split off).
    pub fn canonicalize(&self, path: &str) -> Result<String, CanonicalizeError> {
        let result = match self {
            Canonicalizer::Rfc3986 => rfc3986::canonicalize(path),
            Canonicalizer::Legacy => legacy::canonicalize(path),
        };

        if let Err(reason) = &result {
            tracing::debug!(canonicalizer = ?self, %reason, "path rejected");
        }

        result
    }
}
