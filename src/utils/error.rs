use thiserror::Error;

#[derive(Error, Debug)]
pub enum RevisionError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{method} {url} returned {status}")]
    UnexpectedStatus {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    #[error("Could not decode response: {message}")]
    DecodeError { message: String },

    #[error("Tag generation failed: {message}")]
    TagError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl RevisionError {
    /// 轉成 console 上顯示的錯誤內容
    ///
    /// 非預期狀態碼時優先顯示伺服器回傳的 body：能解析成 JSON 就重新序列化成單行，
    /// 否則原樣輸出；body 為空時只顯示狀態碼。
    pub fn render(&self) -> String {
        match self {
            RevisionError::UnexpectedStatus { status, body, .. } => {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    return format!("HTTP {}", status);
                }
                match serde_json::from_str::<serde_json::Value>(trimmed) {
                    Ok(value) => value.to_string(),
                    Err(_) => trimmed.to_string(),
                }
            }
            other => other.to_string(),
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            RevisionError::ConfigError { .. }
                | RevisionError::MissingConfigError { .. }
                | RevisionError::InvalidConfigValueError { .. }
        )
    }

    /// CLI 結束碼：設定錯誤 2，其他 1
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            2
        } else {
            1
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RevisionError::ApiError(_) => "Check that the backend host is reachable",
            RevisionError::UnexpectedStatus { status, .. } if *status >= 500 => {
                "The backend reported an internal error, try again later"
            }
            RevisionError::UnexpectedStatus { .. } => {
                "Check the resource path and the revision id"
            }
            RevisionError::DecodeError { .. } => {
                "The backend must answer with a JSON array of revisions"
            }
            RevisionError::TagError { .. } => "Pass an explicit --tag or check the tagging settings",
            RevisionError::IoError(_) => "Check that the artifact was built and the path is correct",
            RevisionError::ConfigError { .. }
            | RevisionError::MissingConfigError { .. }
            | RevisionError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or the command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RevisionError>;
