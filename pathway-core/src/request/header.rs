/// The seam between this crate and whatever request type embeds it.
///
/// An implementation exposes the raw path-with-query value (`:path` in
/// HTTP/2 terms, the request target in HTTP/1.1) and accepts a rewritten
/// one. Callers guarantee a path is present before invoking the operations
/// in this module.
pub trait PathHeader {
    /// The current path-with-query value, verbatim.
    fn path(&self) -> &str;

    /// Replaces the path-with-query value.
    fn set_path(&mut self, path: String);
}
