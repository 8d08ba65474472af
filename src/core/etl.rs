use crate::core::{Pipeline, Summary};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub output_path: String,
    pub summary: Summary,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 任何階段失敗都會中止，之後的階段不會執行
    pub async fn run(&self) -> Result<RunOutcome> {
        // Extract
        let raw_data = self.pipeline.extract().await?;

        // Transform
        let report = self.pipeline.transform(raw_data).await?;
        tracing::info!("Normalized {} properties", report.properties.len());

        // Load
        let output_path = self.pipeline.load(&report).await?;

        Ok(RunOutcome {
            output_path,
            summary: report.summary,
        })
    }
}

impl RunOutcome {
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            "📊 Summary:".to_string(),
            format!("   Total: {}", self.summary.total),
            format!("   BID: {}", self.summary.bid),
            format!("   REVIEW: {}", self.summary.review),
            format!("   SKIP: {}", self.summary.skip),
        ]
    }
}
