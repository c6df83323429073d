pub mod error;
pub mod fallback;
pub mod normalize;
pub mod pipeline;
pub mod types;

pub use error::Error;
pub use pipeline::{InferencePipeline, SummaryParams, EMBEDDING_DIM};
pub use types::{
    Acknowledgment, EmbeddingPayload, InferenceRequest, SentimentLabel, SentimentPayload,
    SummaryPayload, TaskPayload, TitlePayload,
};

pub type Result<T> = std::result::Result<T, Error>;
