use crate::core::ConfigProvider;
use crate::domain::model::RawRecord;
use crate::utils::error::{PipelineError, Result};
use chrono::NaiveDate;
use reqwest::Client;

pub const AUCTION_RESULTS_PATH: &str = "/rest/v1/auction_results";

/// PostgREST client for the `auction_results` table.
pub struct SupabaseClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl SupabaseClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}{}",
                config.base_url().trim_end_matches('/'),
                AUCTION_RESULTS_PATH
            ),
            api_key: config.api_key().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 取得拍賣日在 `since` 當天或之後的所有紀錄，依拍賣日遞增排序
    pub async fn fetch_auction_results(&self, since: NaiveDate) -> Result<Vec<RawRecord>> {
        let date_filter = format!("gte.{}", since.format("%Y-%m-%d"));

        tracing::debug!(
            "Making API request to: {} (auction_date={})",
            self.endpoint,
            date_filter
        );
        // Supabase 同時需要 apikey 與 Bearer 兩種標頭
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("select", "*"),
                ("auction_date", date_filter.as_str()),
                ("order", "auction_date.asc"),
            ])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            // reqwest 不提供伺服器自訂的 reason phrase，改用標準說明
            return Err(PipelineError::UpstreamStatusError {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let records: Vec<RawRecord> = response.json().await?;
        Ok(records)
    }
}
