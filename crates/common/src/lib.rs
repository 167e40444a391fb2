//! Shared configuration and process setup.

mod environment;
mod logging;

pub use environment::{GlobitexEnvironment, BASE_URL_VAR};
pub use logging::init_logging;
