pub mod request;
pub mod tracing;

pub use request::TestRequest;
pub use tracing::{CapturedEvent, init_test_tracing};
