mod header;
mod ops;

pub use header::*;
pub use ops::*;

pub use crate::canon::remove_query_and_fragment;
