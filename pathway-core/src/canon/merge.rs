use std::borrow::Cow;

/// Collapses every run of consecutive slashes in a path to a single slash.
///
/// Operates on the path only; callers split the query off first so that `//`
/// inside a query survives untouched. A path without a `//` run is returned
/// borrowed, unchanged. Leading and trailing slashes are preserved:
/// `//a//b//` becomes `/a/b/`.
pub fn merge_slashes(path: &str) -> Cow<'_, str> {
    if !path.contains("//") {
        return Cow::Borrowed(path);
    }

    let mut merged = String::with_capacity(path.len());
    let mut prev_slash = false;

    for ch in path.chars() {
        if ch == '/' {
            if !prev_slash {
                merged.push(ch);
            }
            prev_slash = true;
        } else {
            merged.push(ch);
            prev_slash = false;
        }
    }

    Cow::Owned(merged)
}
