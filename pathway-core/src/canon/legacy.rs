use crate::canon::CanonicalizeError;
use percent_encoding::percent_decode_str;

/// The canonicalizer this crate shipped before the strict RFC 3986 one, kept
/// selectable through `runtime::RFC_3986_CANONICALIZER` for deployments that
/// still depend on its looser behavior.
///
/// Differences from the RFC 3986 canonicalizer, preserved on purpose:
///
/// - The whole path is percent-decoded once up front, so an encoded slash or
///   dot participates in segment structure (`%2F` becomes a real boundary).
/// - Malformed `%` triplets pass through literally instead of rejecting.
/// - Excess `..` at the root is dropped instead of failing closed.
///
/// The decoded bytes must still form valid UTF-8 and must not contain NUL.
pub fn canonicalize(path: &str) -> Result<String, CanonicalizeError> {
    let decoded = percent_decode_str(path)
        .decode_utf8()
        .map_err(|_| CanonicalizeError::InvalidUtf8)?;

    // Reject NUL bytes outright (never valid in HTTP semantics).
    if decoded.as_bytes().contains(&0) {
        return Err(CanonicalizeError::ControlByte);
    }

    Ok(resolve_clamped(&decoded))
}

/// Segment-stack resolution with excess `..` dropped at the root instead of
/// rejected. Same slash-preservation rules as the strict resolver.
fn resolve_clamped(path: &str) -> String {
    let absolute = path.starts_with('/');
    let body = if absolute { &path[1..] } else { path };

    let mut stack: Vec<&str> = Vec::new();
    let mut in_directory = false;

    for segment in body.split('/') {
        match segment {
            "." => {
                in_directory = true;
            }
            ".." => {
                stack.pop();
                in_directory = true;
            }
            _ => {
                stack.push(segment);
                in_directory = false;
            }
        }
    }

    let mut resolved = String::with_capacity(path.len());
    if absolute {
        resolved.push('/');
    }
    resolved.push_str(&stack.join("/"));
    if in_directory && !stack.is_empty() {
        resolved.push('/');
    }

    resolved
}
