use crate::canon::{self, CanonicalizeError, Canonicalizer};
use crate::runtime::FeatureFlags;
use crate::transform::Operation;
use smallvec::SmallVec;
use std::sync::Arc;
use thiserror::Error;

/// A pipeline step refused the path. The original value must be treated as
/// unroutable; forwarding it would ship exactly the ambiguity the pipeline
/// was configured to remove.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    #[error("path canonicalization failed: {0}")]
    Canonicalize(#[from] CanonicalizeError),
}

/// An ordered sequence of path transformations, built once per configuration
/// load and shared read-only across requests.
///
/// [`transform`](Self::transform) keeps no per-call state, so one transformer
/// serves any number of concurrent requests. The flag store decides, per
/// call, which canonicalizer the `normalize_path_rfc_3986` step runs.
#[derive(Debug)]
pub struct PathTransformer {
    operations: SmallVec<[Operation; 4]>,
    flags: Arc<FeatureFlags>,
}

impl PathTransformer {
    pub fn new<I>(operations: I, flags: Arc<FeatureFlags>) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        Self {
            operations: operations.into_iter().collect(),
            flags,
        }
    }

    /// The configured steps, in application order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Applies every configured step, in order, to a path-with-query value,
    /// threading each step's output into the next.
    ///
    /// The query suffix rides along untouched through every step. The first
    /// failing step fails the whole pipeline.
    pub fn transform(&self, original: &str) -> Result<String, TransformError> {
        let mut transformed = original.to_string();

        for op in &self.operations {
            transformed = match apply(*op, &self.flags, &transformed) {
                Ok(next) => next,
                Err(err) => {
                    tracing::warn!(operation = ?op, %err, "path transformation failed");
                    return Err(err);
                }
            };
        }

        Ok(transformed)
    }
}

/// Runs one step: split the query suffix off, transform the path, reattach
/// the suffix byte-for-byte.
fn apply(op: Operation, flags: &FeatureFlags, target: &str) -> Result<String, TransformError> {
    let (path, query) = canon::split_query(target);

    let mut out = match op {
        Operation::NormalizePathRfc3986 => {
            Canonicalizer::from_runtime(flags).canonicalize(path)?
        }
        Operation::MergeSlashes => canon::merge_slashes(path).into_owned(),
    };

    out.push_str(query);
    Ok(out)
}
