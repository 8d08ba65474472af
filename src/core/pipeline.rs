use crate::adapters::http::SupabaseClient;
use crate::core::{ConfigProvider, Pipeline, RawRecord, Report, Storage, Summary};
use crate::domain::normalizer::normalize_all;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};

pub struct ForeclosurePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: SupabaseClient,
    run_started: DateTime<Utc>,
}

impl<S: Storage, C: ConfigProvider> ForeclosurePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let client = SupabaseClient::new(&config)?;
        Ok(Self {
            storage,
            config,
            client,
            run_started: Utc::now(),
        })
    }

    /// 固定執行時間；查詢的日期篩選與 `generated_at` 都以此為準
    pub fn with_run_started(mut self, run_started: DateTime<Utc>) -> Self {
        self.run_started = run_started;
        self
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ForeclosurePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<RawRecord>> {
        tracing::info!("🔍 Fetching foreclosure data from Supabase...");
        let records = self
            .client
            .fetch_auction_results(self.run_started.date_naive())
            .await?;
        tracing::info!("✅ Fetched {} properties", records.len());
        Ok(records)
    }

    async fn transform(&self, data: Vec<RawRecord>) -> Result<Report> {
        let properties = normalize_all(data);
        let summary = Summary::from_records(&properties);
        tracing::debug!(
            "Normalized {} records ({} labelled BID/REVIEW/SKIP)",
            properties.len(),
            summary.labelled()
        );
        Ok(Report::new(properties, summary, self.run_started))
    }

    async fn load(&self, report: &Report) -> Result<String> {
        let json_data = serde_json::to_string_pretty(report)?;

        tracing::debug!("Writing report ({} bytes) to storage", json_data.len());
        let output_path = self
            .storage
            .write_file(self.config.output_path(), json_data.as_bytes())
            .await?;

        tracing::debug!("Report written to {}", output_path);
        Ok(output_path)
    }
}
