//! Per-task dispatch: short-input shortcuts, pipeline invocation, and
//! fallback absorption. Pipeline failure never escapes this module; callers
//! always get a payload whose shape matches the task.

use tracing::warn;

use ais_core::normalize::{self, normalize_title};
use ais_core::{
    fallback, EmbeddingPayload, Error, InferencePipeline, Result, SentimentPayload, SummaryParams,
    SummaryPayload, TitlePayload, EMBEDDING_DIM,
};

/// Inputs at or below these word counts skip the generative pipeline; a
/// cheap deterministic transform does at least as well on them.
pub const TITLE_SHORTCUT_WORDS: usize = 5;
pub const SUMMARY_SHORTCUT_WORDS: usize = 20;

pub async fn sentiment(pipeline: &dyn InferencePipeline, text: &str) -> SentimentPayload {
    match pipeline.analyze_sentiment(text.trim()).await {
        Ok(payload) if payload.score.is_finite() && (0.0..=1.0).contains(&payload.score) => {
            payload
        }
        Ok(payload) => {
            warn!(
                "⚠️ {} returned out-of-range sentiment score {}, falling back",
                pipeline.name(),
                payload.score
            );
            fallback::sentiment_fallback()
        }
        Err(e) => {
            warn!("⚠️ Sentiment analysis failed on {}: {}", pipeline.name(), e);
            fallback::sentiment_fallback()
        }
    }
}

pub async fn title(pipeline: &dyn InferencePipeline, text: &str) -> TitlePayload {
    let trimmed = text.trim();
    if normalize::word_count(trimmed) <= TITLE_SHORTCUT_WORDS {
        return TitlePayload {
            title: normalize_title(trimmed),
        };
    }
    match pipeline.generate_title(trimmed).await {
        Ok(raw) => TitlePayload {
            title: normalize_title(&raw),
        },
        Err(e) => {
            warn!("⚠️ Title generation failed on {}: {}", pipeline.name(), e);
            fallback::title_fallback(trimmed)
        }
    }
}

pub async fn summary(pipeline: &dyn InferencePipeline, text: &str) -> SummaryPayload {
    let trimmed = text.trim();
    let words = normalize::word_count(trimmed);
    if words <= SUMMARY_SHORTCUT_WORDS {
        return SummaryPayload {
            summary: trimmed.to_string(),
        };
    }
    let params = SummaryParams::for_input_words(words);
    match pipeline.summarize(trimmed, params).await {
        Ok(summary) => SummaryPayload { summary },
        Err(e) => {
            warn!("⚠️ Summarization failed on {}: {}", pipeline.name(), e);
            fallback::summary_fallback(trimmed)
        }
    }
}

/// The one request-rejection condition: embeddings of nothing are refused
/// before any pipeline call, callback or not.
pub fn ensure_embedding_input(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::InvalidInput(
            "Text must not be empty for embedding generation".to_string(),
        ));
    }
    Ok(())
}

pub async fn embedding(pipeline: &dyn InferencePipeline, text: &str) -> EmbeddingPayload {
    match pipeline.generate_embedding(text.trim()).await {
        Ok(vector) if vector.len() == EMBEDDING_DIM => EmbeddingPayload { embedding: vector },
        Ok(vector) => {
            warn!(
                "⚠️ {} returned a {}-dim embedding, expected {}, falling back",
                pipeline.name(),
                vector.len(),
                EMBEDDING_DIM
            );
            fallback::embedding_fallback()
        }
        Err(e) => {
            warn!("⚠️ Embedding generation failed on {}: {}", pipeline.name(), e);
            fallback::embedding_fallback()
        }
    }
}
