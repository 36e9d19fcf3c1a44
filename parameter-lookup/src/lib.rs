pub mod configs;
pub mod domain;
pub mod error;
pub mod handler;
pub mod server;
pub mod storage;

pub use error::LookupFailure;
pub use handler::{ParameterLookupHandler, ResponseEnvelope};
