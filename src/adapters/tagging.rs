use crate::domain::ports::TagGenerator;
use crate::utils::error::{Result, RevisionError};
use std::path::PathBuf;
use std::process::Command;

const SHORT_SHA_LEN: usize = 7;

/// 直接使用呼叫端給的 id（CLI 的 `--tag`）
#[derive(Debug, Clone)]
pub struct FixedTag(pub String);

impl TagGenerator for FixedTag {
    fn create_tag(&self) -> Result<String> {
        if self.0.trim().is_empty() {
            return Err(RevisionError::TagError {
                message: "tag cannot be empty".to_string(),
            });
        }
        Ok(self.0.clone())
    }
}

/// `<project>:<short sha>` taken from the repository's HEAD commit.
#[derive(Debug, Clone)]
pub struct GitShaTagger {
    project: String,
    repo_dir: PathBuf,
}

impl GitShaTagger {
    pub fn new(project: impl Into<String>, repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            project: project.into(),
            repo_dir: repo_dir.into(),
        }
    }
}

impl TagGenerator for GitShaTagger {
    fn create_tag(&self) -> Result<String> {
        let output = Command::new("git")
            .arg("rev-parse")
            .arg("HEAD")
            .current_dir(&self.repo_dir)
            .output()
            .map_err(|e| RevisionError::TagError {
                message: format!("could not run git: {}", e),
            })?;

        if !output.status.success() {
            return Err(RevisionError::TagError {
                message: format!(
                    "git rev-parse failed in {}: {}",
                    self.repo_dir.display(),
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        let sha = String::from_utf8_lossy(&output.stdout).trim().to_string();
        format_sha_tag(&self.project, &sha)
    }
}

fn format_sha_tag(project: &str, sha: &str) -> Result<String> {
    if sha.len() < SHORT_SHA_LEN || !sha.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(RevisionError::TagError {
            message: format!("unexpected commit sha: {:?}", sha),
        });
    }
    Ok(format!("{}:{}", project, &sha[..SHORT_SHA_LEN]))
}

/// `<project>:<UTC yyyymmddHHMMSS>`
#[derive(Debug, Clone)]
pub struct TimestampTagger {
    project: String,
}

impl TimestampTagger {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
        }
    }
}

impl TagGenerator for TimestampTagger {
    fn create_tag(&self) -> Result<String> {
        Ok(format!(
            "{}:{}",
            self.project,
            chrono::Utc::now().format("%Y%m%d%H%M%S")
        ))
    }
}
