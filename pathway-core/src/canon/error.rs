use thiserror::Error;

/// Why a path could not be canonicalized.
///
/// Every variant is terminal: the request carrying the path must be rejected,
/// never forwarded as-is, because its resolution is ambiguous or dangerous.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalizeError {
    /// A `%` not followed by two hexadecimal digits.
    #[error("invalid percent-encoding in path")]
    InvalidPercentEncoding,

    /// A raw control byte (0x00-0x1F or 0x7F) in the path.
    #[error("control byte in path")]
    ControlByte,

    /// A `..` segment that would resolve above the root.
    #[error("path traversal above root")]
    PathTraversal,

    /// Percent-decoding produced bytes that are not valid UTF-8.
    #[error("path is not valid UTF-8 after percent-decoding")]
    InvalidUtf8,
}
