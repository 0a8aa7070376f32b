use crate::config::AdapterConfig;
use crate::utils::error::{Result, RevisionError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    pub backend: BackendConfig,
    pub tagging: Option<TaggingConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub host: String,
    pub resource: String,
    pub manifest_size: Option<usize>,
    pub timeout_seconds: Option<u64>,
    pub activate_command: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagStrategy {
    #[default]
    Git,
    Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggingConfig {
    #[serde(default)]
    pub strategy: TagStrategy,
    pub project: String,
    pub repo_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub color: Option<bool>,
}

impl DeployConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RevisionError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RevisionError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${REVISIONS_HOST})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| RevisionError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn adapter_config(&self) -> AdapterConfig {
        AdapterConfig {
            host: self.backend.host.clone(),
            resource: self.backend.resource.clone(),
            manifest_size: self.backend.manifest_size,
            timeout_seconds: self.backend.timeout_seconds,
            activate_command: self.backend.activate_command.clone(),
        }
    }

    pub fn color_enabled(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|output| output.color)
            .unwrap_or(true)
    }
}

impl Validate for DeployConfig {
    fn validate(&self) -> Result<()> {
        self.adapter_config().validate()?;

        if let Some(tagging) = &self.tagging {
            validation::validate_non_empty_string("tagging.project", &tagging.project)?;
            if let Some(dir) = &tagging.repo_dir {
                validation::validate_path("tagging.repo_dir", dir)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[backend]
host = "https://revisions.example.com/"
resource = "/apps/web/"
manifest_size = 5
timeout_seconds = 30

[tagging]
strategy = "timestamp"
project = "web"

[output]
color = false
"#;

        let config = DeployConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.backend.manifest_size, Some(5));
        assert_eq!(
            config.tagging.as_ref().map(|t| t.strategy),
            Some(TagStrategy::Timestamp)
        );
        assert!(!config.color_enabled());

        let adapter = config.adapter_config().normalize().unwrap();
        assert_eq!(adapter.host, "https://revisions.example.com");
        assert_eq!(adapter.resource, "apps/web");
    }

    #[test]
    fn test_minimal_config_defaults() {
        let toml_content = r#"
[backend]
host = "http://localhost:3000"
resource = "revisions"

[tagging]
project = "web"
"#;

        let config = DeployConfig::from_toml_str(toml_content).unwrap();
        assert!(config.color_enabled());
        assert_eq!(
            config.tagging.as_ref().map(|t| t.strategy),
            Some(TagStrategy::Git)
        );
        assert_eq!(config.adapter_config().manifest_size(), 10);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("REVISION_REST_TEST_HOST", "https://env.example.com");

        let toml_content = r#"
[backend]
host = "${REVISION_REST_TEST_HOST}"
resource = "revisions"
"#;

        let config = DeployConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.backend.host, "https://env.example.com");

        std::env::remove_var("REVISION_REST_TEST_HOST");
    }

    #[test]
    fn test_unknown_env_var_is_kept_and_fails_validation() {
        let toml_content = r#"
[backend]
host = "${REVISION_REST_SURELY_UNSET_VAR}"
resource = "revisions"
"#;

        let config = DeployConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.backend.host, "${REVISION_REST_SURELY_UNSET_VAR}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = DeployConfig::from_toml_str("[backend\nhost = 1");
        assert!(matches!(result, Err(RevisionError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[backend]
host = "http://localhost:8080"
resource = "revisions"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = DeployConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.backend.resource, "revisions");
        assert!(config.tagging.is_none());
    }
}
