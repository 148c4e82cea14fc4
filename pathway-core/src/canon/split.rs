/// Splits a request target into its path and its query suffix.
///
/// The suffix starts at the first `?` (inclusive) and is returned
/// byte-for-byte; it is empty when the target carries no query. Nothing is
/// decoded on either side, so the caller can reattach the suffix verbatim
/// after rewriting the path.
pub fn split_query(target: &str) -> (&str, &str) {
    match target.find('?') {
        Some(pos) => target.split_at(pos),
        None => (target, ""),
    }
}

/// Returns the path portion of a request target, stripping the query and
/// fragment.
///
/// Cuts at the first `?` or `#`, whichever comes first. Fragments are not
/// legal in request targets, but misbehaving clients send them anyway and
/// they must never leak into route matching.
pub fn remove_query_and_fragment(target: &str) -> &str {
    match target.find(['?', '#']) {
        Some(pos) => &target[..pos],
        None => target,
    }
}
