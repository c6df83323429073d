use std::sync::Arc;

use ais_core::{Error, InferencePipeline, Result};

use crate::Config;

pub mod heuristic;
pub mod remote;

pub use heuristic::HeuristicPipeline;
pub use remote::RemotePipeline;

/// Build the pipeline backend named in the config. Defaults to the local
/// heuristic backend, which needs no network and never fails to construct.
pub async fn create_pipeline(config: Option<Config>) -> Result<Arc<dyn InferencePipeline>> {
    let config = config.unwrap_or_default();
    match config.model_name.as_deref().unwrap_or("heuristic") {
        "heuristic" => Ok(Arc::new(HeuristicPipeline::new())),
        "remote" => Ok(Arc::new(RemotePipeline::new(
            config.model_url,
            config.api_key,
        )?)),
        other => Err(Error::Inference(format!("Unknown model backend: {}", other))),
    }
}
