use ais_inference::PipelineRegistry;

use crate::delivery::CallbackDelivery;

pub struct AppState {
    pub registry: PipelineRegistry,
    pub delivery: CallbackDelivery,
}

impl AppState {
    pub fn new(registry: PipelineRegistry) -> Self {
        Self {
            registry,
            delivery: CallbackDelivery::new(),
        }
    }
}
