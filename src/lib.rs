pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{Cli, Command};

pub use adapters::console::{BufferedReporter, LineKind, TerminalReporter};
pub use adapters::storage::LocalStorage;
pub use adapters::tagging::{FixedTag, GitShaTagger, TimestampTagger};
pub use config::{toml_config::DeployConfig, AdapterConfig};
pub use crate::core::adapter::RevisionAdapter;
pub use domain::model::{Outcome, Revision};
pub use utils::error::{Result, RevisionError};
