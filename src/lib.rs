pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{http::SupabaseClient, storage::LocalStorage};
pub use config::SupabaseConfig;
pub use crate::core::{
    etl::{EtlEngine, RunOutcome},
    pipeline::ForeclosurePipeline,
};
pub use utils::error::{PipelineError, Result};
