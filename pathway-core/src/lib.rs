pub mod canon;
pub mod conf;
pub mod request;
pub mod runtime;
pub mod transform;
