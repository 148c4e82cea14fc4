use crate::canon::CanonicalizeError;
use crate::runtime::{FeatureFlags, RFC_3986_CANONICALIZER};
use crate::transform::{Operation, PathTransformer, TransformError};
use std::sync::Arc;

fn transformer(operations: &[Operation]) -> PathTransformer {
    PathTransformer::new(operations.iter().copied(), Arc::new(FeatureFlags::new()))
}

//-----------------------------------------------------------------------------
// Ordering
//-----------------------------------------------------------------------------
#[test]
fn empty_pipeline_is_identity() {
    let pipeline = transformer(&[]);

    let out = pipeline.transform("/a//b/../c?q=1").unwrap();

    assert_eq!(out, "/a//b/../c?q=1");
}

#[test]
fn merge_then_normalize() {
    let pipeline = transformer(&[Operation::MergeSlashes, Operation::NormalizePathRfc3986]);

    let out = pipeline.transform("//a/../b?x=1").unwrap();

    assert_eq!(out, "/b?x=1");
}

#[test]
fn order_changes_the_outcome() {
    // ".." pops the empty segment of the run when slashes are still doubled,
    // but pops "a" once the run has been merged away.
    let raw = "/a//../b?x=1";

    let normalize_first = transformer(&[Operation::NormalizePathRfc3986, Operation::MergeSlashes]);
    let merge_first = transformer(&[Operation::MergeSlashes, Operation::NormalizePathRfc3986]);

    assert_eq!(normalize_first.transform(raw).unwrap(), "/a/b?x=1");
    assert_eq!(merge_first.transform(raw).unwrap(), "/b?x=1");
}

#[test]
fn operations_keep_configured_order() {
    let pipeline = transformer(&[Operation::NormalizePathRfc3986, Operation::MergeSlashes]);

    assert_eq!(
        pipeline.operations(),
        [Operation::NormalizePathRfc3986, Operation::MergeSlashes]
    );
}

#[test]
fn duplicate_operations_are_kept() {
    let pipeline = transformer(&[Operation::MergeSlashes, Operation::MergeSlashes]);

    assert_eq!(pipeline.operations().len(), 2);
}

//-----------------------------------------------------------------------------
// Query suffix is never touched
//-----------------------------------------------------------------------------
#[test]
fn query_suffix_rides_along_verbatim() {
    let pipeline = transformer(&[Operation::MergeSlashes, Operation::NormalizePathRfc3986]);

    let out = pipeline.transform("/a//b/%2e/c?q=//%2e%2e&x=%2F").unwrap();

    assert_eq!(out, "/a/b/c?q=//%2e%2e&x=%2F");
}

#[test]
fn bare_question_mark_survives() {
    let pipeline = transformer(&[Operation::MergeSlashes]);

    let out = pipeline.transform("/a//b?").unwrap();

    assert_eq!(out, "/a/b?");
}

//-----------------------------------------------------------------------------
// Failure propagation
//-----------------------------------------------------------------------------
#[test]
fn canonicalization_failure_fails_the_pipeline() {
    let pipeline = transformer(&[Operation::NormalizePathRfc3986]);

    let result = pipeline.transform("/../x?q=1");

    assert_eq!(
        result,
        Err(TransformError::Canonicalize(
            CanonicalizeError::PathTraversal
        ))
    );
}

#[test]
fn later_step_failure_propagates() {
    let pipeline = transformer(&[Operation::MergeSlashes, Operation::NormalizePathRfc3986]);

    let result = pipeline.transform("//../../x");

    assert_eq!(
        result,
        Err(TransformError::Canonicalize(
            CanonicalizeError::PathTraversal
        ))
    );
}

//-----------------------------------------------------------------------------
// Flag-selected canonicalizer, read per call
//-----------------------------------------------------------------------------
#[test]
fn flag_flip_applies_to_later_calls() {
    let flags = Arc::new(FeatureFlags::new());
    let pipeline = PathTransformer::new([Operation::NormalizePathRfc3986], flags.clone());

    let strict = pipeline.transform("/%2e%2e/a");
    flags.set(RFC_3986_CANONICALIZER, false);
    let legacy = pipeline.transform("/%2e%2e/a");

    assert!(strict.is_err());
    assert_eq!(legacy.as_deref(), Ok("/a"));
}

//-----------------------------------------------------------------------------
// Shared read-only across requests
//-----------------------------------------------------------------------------
#[test]
fn transformer_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<PathTransformer>();
}
