use crate::canon::CanonicalizeError;
use percent_encoding::percent_encode_byte;

/// Canonicalizes an HTTP request path according to RFC 3986 (URI Generic Syntax).
///
/// This function enforces the following behaviors:
///
/// - **RFC 3986 § 2.3**: Decodes percent-encoded unreserved characters
///   (ALPHA / DIGIT / "-" / "." / "_" / "~") to their literal form.
/// - **RFC 3986 § 2.1**: Keeps every other triplet encoded, normalized to
///   uppercase hexadecimal, so an encoded `/` or `\` can never change the
///   segment structure.
/// - **RFC 3986 § 5.2.4**: Removes dot-segments (`.` and `..`) over a segment
///   stack, after decoding, so `%2e%2e` resolves exactly like `..`.
/// - Converts `\` to `/` before segment processing, matching what lenient
///   HTTP servers do with backslashes.
/// - Re-encodes raw non-ASCII bytes so both spellings of a character land on
///   the same canonical form.
///
/// Consecutive slashes are left alone. RFC 3986 dot-segment removal treats an
/// empty segment as a real segment (`..` pops it), and collapsing slash runs
/// is a separately configured step.
///
/// Fails closed: malformed percent-encoding, raw control bytes, and a `..`
/// that would resolve above the root all reject the path instead of guessing.
pub fn canonicalize(path: &str) -> Result<String, CanonicalizeError> {
    let decoded = percent_decode_unreserved(path)?;
    resolve_dot_segments(&decoded)
}

/// Decodes percent-encoded sequences that represent unreserved characters per
/// RFC 3986 Section 2.3, leaving everything else encoded.
///
/// # Security
/// - Rejects malformed percent-encoding (incomplete or non-hex triplets)
/// - Rejects raw control bytes (0x00-0x1F, 0x7F) outright
/// - Never decodes reserved or non-ASCII bytes, so decoding cannot introduce
///   new segment boundaries
/// - Normalizes preserved triplets to uppercase per RFC 3986 Section 2.1
fn percent_decode_unreserved(path: &str) -> Result<String, CanonicalizeError> {
    let bytes = path.as_bytes();
    let mut out = String::with_capacity(path.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hi = bytes.get(i + 1).copied().and_then(hex_value);
                let lo = bytes.get(i + 2).copied().and_then(hex_value);
                let val = match (hi, lo) {
                    (Some(hi), Some(lo)) => hi << 4 | lo,
                    _ => return Err(CanonicalizeError::InvalidPercentEncoding),
                };

                // Decode unreserved characters only (RFC 3986 Section 2.3).
                if is_unreserved(val) {
                    out.push(val as char);
                } else {
                    out.push_str(percent_encode_byte(val));
                }

                i += 3;
            }
            b'\\' => {
                out.push('/');
                i += 1;
            }
            0x00..=0x1F | 0x7F => return Err(CanonicalizeError::ControlByte),
            byte @ 0x80.. => {
                // Raw non-ASCII. The input is valid UTF-8, so encoding each
                // byte of a multibyte character yields its canonical triplets.
                out.push_str(percent_encode_byte(byte));
                i += 1;
            }
            byte => {
                out.push(byte as char);
                i += 1;
            }
        }
    }

    Ok(out)
}

/// Unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~" (RFC 3986 Section 2.3).
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

fn hex_value(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|v| v as u8)
}

/// Removes `.` and `..` segments over a segment stack (RFC 3986 Section 5.2.4).
///
/// Empty segments are real segments here: `..` pops them, and slash runs
/// survive resolution. A leading slash is preserved, and a path ending in a
/// dot-segment keeps the slash that preceded it.
fn resolve_dot_segments(path: &str) -> Result<String, CanonicalizeError> {
    let absolute = path.starts_with('/');
    let body = if absolute { &path[1..] } else { path };

    let mut stack: Vec<&str> = Vec::new();
    let mut in_directory = false;

    for segment in body.split('/') {
        match segment {
            "." => {
                // no-op segment.
                in_directory = true;
            }
            ".." => {
                // prevent traversal above root.
                if stack.pop().is_none() {
                    return Err(CanonicalizeError::PathTraversal);
                }
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

    Ok(resolved)
}
