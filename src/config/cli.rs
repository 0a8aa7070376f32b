use crate::config::toml_config::{BackendConfig, DeployConfig};
use crate::utils::error::{Result, RevisionError};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "revisions.toml";

#[derive(Debug, Clone, Parser)]
#[command(name = "revctl")]
#[command(about = "Upload, list and activate revisions on a REST backend")]
pub struct Cli {
    #[arg(long, global = true, help = "Path to the TOML config (default: ./revisions.toml if present)")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Backend base URL, overrides backend.host")]
    pub host: Option<String>,

    #[arg(long, global = true, help = "Resource path, overrides backend.resource")]
    pub resource: Option<String>,

    #[arg(long, global = true, help = "Number of revisions shown by `list`")]
    pub manifest_size: Option<usize>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Upload the built artifact as a new revision
    Upload {
        #[arg(long, default_value = "dist")]
        dist_dir: String,

        #[arg(long, default_value = "index.html")]
        file: String,

        #[arg(long, help = "Use this revision id instead of generating one")]
        tag: Option<String>,
    },

    /// List the most recent revisions
    List,

    /// Mark a revision as current
    Activate {
        #[arg(long)]
        revision: Option<String>,
    },
}

impl Cli {
    /// 讀取設定檔（沒指定時找預設檔），再套用命令列覆寫
    pub fn resolve_config(&self) -> Result<DeployConfig> {
        let path = match &self.config {
            Some(path) => Some(path.clone()),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                default.exists().then(|| default.to_path_buf())
            }
        };

        let mut config = match path {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                DeployConfig::from_file(&path)?
            }
            None => {
                let host = self.host.clone().ok_or_else(|| RevisionError::MissingConfigError {
                    field: "backend.host (no config file found, pass --host)".to_string(),
                })?;
                let resource =
                    self.resource
                        .clone()
                        .ok_or_else(|| RevisionError::MissingConfigError {
                            field: "backend.resource (no config file found, pass --resource)"
                                .to_string(),
                        })?;
                DeployConfig {
                    backend: BackendConfig {
                        host,
                        resource,
                        manifest_size: None,
                        timeout_seconds: None,
                        activate_command: None,
                    },
                    tagging: None,
                    output: None,
                }
            }
        };

        if let Some(host) = &self.host {
            config.backend.host = host.clone();
        }
        if let Some(resource) = &self.resource {
            config.backend.resource = resource.clone();
        }
        if let Some(size) = self.manifest_size {
            config.backend.manifest_size = Some(size);
        }

        Ok(config)
    }

    pub fn color_enabled(&self, config: &DeployConfig) -> bool {
        !self.no_color && config.color_enabled()
    }
}
