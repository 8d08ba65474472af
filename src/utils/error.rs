use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{field} environment variable required")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    /// `status_text` 為狀態碼的標準說明；reqwest 不提供伺服器回傳的 reason phrase
    #[error("API Error: {status} {status_text}")]
    UpstreamStatusError { status: u16, status_text: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Upstream,
    Unexpected,
}

impl PipelineError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::UpstreamStatusError { .. } => ErrorCategory::Upstream,
            Self::HttpError(_) | Self::IoError(_) | Self::SerializationError(_) => {
                ErrorCategory::Unexpected
            }
        }
    }

    /// 設定錯誤與上游狀態錯誤回傳 1，其他未預期錯誤回傳 2
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Upstream => 1,
            ErrorCategory::Unexpected => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::HttpError(e) if e.is_timeout() => {
                "Supabase did not respond before the request timed out".to_string()
            }
            Self::HttpError(e) if e.is_decode() => {
                format!("Supabase returned a response that is not a list of auction records: {}", e)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MissingConfigError { .. } => {
                "Export SUPABASE_KEY with the project's service or anon key"
            }
            Self::InvalidConfigValueError { .. } => {
                "Set SUPABASE_URL to the project URL, e.g. https://<ref>.supabase.co"
            }
            Self::UpstreamStatusError { status, .. } if *status == 401 || *status == 403 => {
                "Check that SUPABASE_KEY is valid for this project"
            }
            Self::UpstreamStatusError { .. } => "Check the Supabase project status and try again",
            Self::HttpError(_) => "Check network connectivity and the SUPABASE_URL host",
            Self::IoError(_) => "Make sure the data/ directory is writable",
            Self::SerializationError(_) => "Inspect the upstream rows for unexpected values",
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        let missing = PipelineError::MissingConfigError {
            field: "SUPABASE_KEY".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Configuration);
        assert_eq!(missing.exit_code(), 1);
        assert!(missing.to_string().contains("SUPABASE_KEY"));

        let upstream = PipelineError::UpstreamStatusError {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(upstream.category(), ErrorCategory::Upstream);
        assert_eq!(upstream.exit_code(), 1);
        assert_eq!(upstream.to_string(), "API Error: 500 Internal Server Error");

        let io = PipelineError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        ));
        assert_eq!(io.category(), ErrorCategory::Unexpected);
        assert_eq!(io.exit_code(), 2);
    }
}
