use std::sync::Arc;

use ais_core::{InferencePipeline, Result};

pub mod models;

pub use models::create_pipeline;

/// Backend selection, resolved once at startup.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub model_name: Option<String>,
    pub model_url: Option<String>,
    pub api_key: Option<String>,
}

/// One pipeline handle per task type, constructed during initialization and
/// shared read-only across requests. Slots may alias the same backend.
#[derive(Clone)]
pub struct PipelineRegistry {
    pub sentiment: Arc<dyn InferencePipeline>,
    pub title: Arc<dyn InferencePipeline>,
    pub summary: Arc<dyn InferencePipeline>,
    pub embedding: Arc<dyn InferencePipeline>,
}

impl PipelineRegistry {
    /// Serve every task from a single shared backend.
    pub fn shared(pipeline: Arc<dyn InferencePipeline>) -> Self {
        Self {
            sentiment: pipeline.clone(),
            title: pipeline.clone(),
            summary: pipeline.clone(),
            embedding: pipeline,
        }
    }
}

pub async fn create_registry(config: Option<Config>) -> Result<PipelineRegistry> {
    let pipeline = create_pipeline(config).await?;
    Ok(PipelineRegistry::shared(pipeline))
}

pub mod prelude {
    pub use super::models::create_pipeline;
    pub use super::{Config, PipelineRegistry};
    pub use ais_core::{Error, InferencePipeline, Result, SummaryParams};
}
