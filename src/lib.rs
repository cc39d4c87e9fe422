pub mod config;
pub mod error;
pub mod report;
pub mod run;
pub mod search;

pub use config::{RunConfig, SearchCredentials};
pub use error::{ConfigError, FetchError, RunError};
pub use run::run_search;
