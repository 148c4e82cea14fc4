mod op;
mod pipeline;
#[cfg(test)]
mod tests;

pub use op::*;
pub use pipeline::*;
