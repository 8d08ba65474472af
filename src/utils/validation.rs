use crate::utils::error::{PipelineError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PipelineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PipelineError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PipelineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PipelineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PipelineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 空字串與純空白視為未設定
pub fn validate_required_secret(field_name: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(PipelineError::MissingConfigError {
            field: field_name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("SUPABASE_URL", "https://example.supabase.co").is_ok());
        assert!(validate_url("SUPABASE_URL", "http://127.0.0.1:54321").is_ok());
        assert!(validate_url("SUPABASE_URL", "").is_err());
        assert!(validate_url("SUPABASE_URL", "invalid-url").is_err());
        assert!(validate_url("SUPABASE_URL", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "data/foreclosures.json").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "data/\0.json").is_err());
    }

    #[test]
    fn test_validate_required_secret() {
        assert!(validate_required_secret("SUPABASE_KEY", Some("abc")).is_ok());
        assert!(matches!(
            validate_required_secret("SUPABASE_KEY", None),
            Err(PipelineError::MissingConfigError { .. })
        ));
        assert!(validate_required_secret("SUPABASE_KEY", Some("   ")).is_err());
    }
}
