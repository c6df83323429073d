use async_trait::async_trait;

use crate::types::SentimentPayload;
use crate::Result;

/// Every embedding backend in the registry produces vectors of this size.
pub const EMBEDDING_DIM: usize = 384;

/// Length band handed to summarization backends, derived from input size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryParams {
    pub min_length: usize,
    pub max_length: usize,
}

impl SummaryParams {
    /// Scale the requested summary length with the input, clamped to a band
    /// that keeps short inputs from over-compressing and long inputs from
    /// running away.
    pub fn for_input_words(word_count: usize) -> Self {
        Self {
            max_length: (word_count / 3).clamp(50, 150),
            min_length: (word_count / 6).clamp(20, 30),
        }
    }
}

/// Uniform capability over a pretrained model backend. One invocation per
/// call, pass or fail; retries and fallbacks live above this trait.
#[async_trait]
pub trait InferencePipeline: Send + Sync {
    fn name(&self) -> &str;

    /// Classify the sentiment of a piece of text.
    async fn analyze_sentiment(&self, text: &str) -> Result<SentimentPayload>;

    /// Generate a raw title for a piece of text. Callers normalize it.
    async fn generate_title(&self, text: &str) -> Result<String>;

    /// Summarize text within the given length band, deterministically.
    async fn summarize(&self, text: &str, params: SummaryParams) -> Result<String>;

    /// Generate an embedding vector for a piece of text.
    async fn generate_embedding(&self, text: &str) -> Result<Vec<f32>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_params_scale_with_input() {
        let params = SummaryParams::for_input_words(300);
        assert_eq!(params.max_length, 100);
        assert_eq!(params.min_length, 30);
    }

    #[test]
    fn summary_params_clamp_short_inputs() {
        let params = SummaryParams::for_input_words(30);
        assert_eq!(params.max_length, 50);
        assert_eq!(params.min_length, 20);
    }

    #[test]
    fn summary_params_clamp_long_inputs() {
        let params = SummaryParams::for_input_words(10_000);
        assert_eq!(params.max_length, 150);
        assert_eq!(params.min_length, 30);
    }
}
