use crate::canon::{self, CanonicalizeError, Canonicalizer};
use crate::request::PathHeader;
use crate::runtime::FeatureFlags;

/// Rewrites a request's path to canonical form, keeping the query suffix
/// byte-for-byte.
///
/// The flag store picks the canonicalizer implementation. On failure the
/// header is left untouched and the caller must reject the request rather
/// than forward it un-normalized.
pub fn canonical_path<H>(header: &mut H, flags: &FeatureFlags) -> Result<(), CanonicalizeError>
where
    H: PathHeader,
{
    let original = header.path();
    debug_assert!(!original.is_empty(), "request has no path");

    let (path, query) = canon::split_query(original);
    let mut canonical = Canonicalizer::from_runtime(flags).canonicalize(path)?;
    canonical.push_str(query);

    header.set_path(canonical);
    Ok(())
}

/// Collapses consecutive slashes in a request's path, keeping the query
/// suffix byte-for-byte. A path with no slash run is left untouched, with no
/// header write at all.
pub fn merge_slashes<H>(header: &mut H)
where
    H: PathHeader,
{
    let original = header.path();
    debug_assert!(!original.is_empty(), "request has no path");

    let (path, query) = canon::split_query(original);
    if !path.contains("//") {
        return;
    }

    let mut merged = canon::merge_slashes(path).into_owned();
    merged.push_str(query);

    header.set_path(merged);
}
