#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MANIFEST_SIZE: usize = 10;
pub const DEFAULT_ACTIVATE_COMMAND: &str = "revctl activate";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterConfig {
    pub host: String,
    pub resource: String,
    pub manifest_size: Option<usize>,
    pub timeout_seconds: Option<u64>,
    pub activate_command: Option<String>,
}

impl AdapterConfig {
    pub fn new(host: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            resource: resource.into(),
            manifest_size: None,
            timeout_seconds: None,
            activate_command: None,
        }
    }

    pub fn with_manifest_size(mut self, size: usize) -> Self {
        self.manifest_size = Some(size);
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    pub fn with_activate_command(mut self, command: impl Into<String>) -> Self {
        self.activate_command = Some(command.into());
        self
    }

    /// 去掉 host 結尾的 `/`，以及 resource 開頭與結尾的 `/`，再做驗證
    pub fn normalize(mut self) -> Result<Self> {
        if let Some(stripped) = self.host.strip_suffix('/') {
            self.host = stripped.to_string();
        }

        let resource = {
            let trimmed = self.resource.strip_suffix('/').unwrap_or(&self.resource);
            trimmed.strip_prefix('/').unwrap_or(trimmed).to_string()
        };
        self.resource = resource;

        self.validate()?;
        Ok(self)
    }

    pub fn manifest_size(&self) -> usize {
        self.manifest_size.unwrap_or(DEFAULT_MANIFEST_SIZE)
    }

    pub fn activate_command(&self) -> &str {
        self.activate_command
            .as_deref()
            .unwrap_or(DEFAULT_ACTIVATE_COMMAND)
    }
}

impl Validate for AdapterConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("backend.host", &self.host)?;

        if let Some(size) = self.manifest_size {
            validation::validate_positive_number("backend.manifest_size", size, 1)?;
        }

        if let Some(timeout) = self.timeout_seconds {
            validation::validate_range("backend.timeout_seconds", timeout, 1, 3600)?;
        }

        Ok(())
    }
}
