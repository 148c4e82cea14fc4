mod canonicalizer;
mod error;
mod legacy;
mod merge;
mod rfc3986;
mod split;

pub use canonicalizer::*;
pub use error::*;
pub use merge::*;
pub use split::*;
