use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_required_secret, validate_url, Validate};
use std::env;
use std::fmt;
use std::time::Duration;

pub const SUPABASE_URL_VAR: &str = "SUPABASE_URL";
pub const SUPABASE_KEY_VAR: &str = "SUPABASE_KEY";

pub const DEFAULT_SUPABASE_URL: &str = "https://mocerqjnksmhcjzxrewo.supabase.co";
pub const DEFAULT_OUTPUT_PATH: &str = "data/foreclosures.json";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Supabase 連線設定，於啟動時建立一次後傳入各階段
#[derive(Clone)]
pub struct SupabaseConfig {
    pub base_url: String,
    pub api_key: String,
    pub output_path: String,
    pub request_timeout: Duration,
}

impl SupabaseConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 以任意查找函式解析設定，方便測試時不必修改行程環境變數
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(SUPABASE_KEY_VAR);
        validate_required_secret(SUPABASE_KEY_VAR, api_key.as_deref())?;
        let api_key = api_key.unwrap_or_default();

        // 空字串視同未設定
        let base_url = lookup(SUPABASE_URL_VAR)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_SUPABASE_URL.to_string());

        Ok(Self::new(base_url, api_key))
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("output_path", &self.output_path)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl ConfigProvider for SupabaseConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

impl Validate for SupabaseConfig {
    fn validate(&self) -> Result<()> {
        validate_required_secret(SUPABASE_KEY_VAR, Some(self.api_key.as_str()))?;
        validate_url(SUPABASE_URL_VAR, &self.base_url)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
