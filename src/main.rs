use foreclosure_fetch::utils::{logger, validation::Validate};
use foreclosure_fetch::{
    EtlEngine, ForeclosurePipeline, LocalStorage, PipelineError, RunOutcome, SupabaseConfig,
};
use std::process::ExitCode;

async fn run() -> Result<RunOutcome, PipelineError> {
    // 任何網路請求之前先確認憑證
    let config = SupabaseConfig::from_env()?;
    config.validate()?;
    tracing::debug!("Config: {:?}", config);

    let storage = LocalStorage::new(".".to_string());
    let pipeline = ForeclosurePipeline::new(storage, config)?;

    EtlEngine::new(pipeline).run().await
}

#[tokio::main]
async fn main() -> ExitCode {
    logger::init_cli_logger();

    match run().await {
        Ok(outcome) => {
            println!("💾 Saved to {}", outcome.output_path);
            println!();
            for line in outcome.summary_lines() {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("Run failed: {} (Category: {:?})", e, e.category());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            ExitCode::from(e.exit_code())
        }
    }
}
