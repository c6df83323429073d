//! Deterministic degraded outputs substituted when a pipeline fails.
//!
//! Every fallback is computed purely from the original input text and is
//! structurally identical to the success payload of its task, so callers
//! never branch on shape.

use crate::normalize::{self, ELLIPSIS};
use crate::pipeline::EMBEDDING_DIM;
use crate::types::{
    EmbeddingPayload, SentimentLabel, SentimentPayload, SummaryPayload, TitlePayload,
};

pub const SUMMARY_FALLBACK_WORDS: usize = 100;

pub fn sentiment_fallback() -> SentimentPayload {
    SentimentPayload {
        label: SentimentLabel::Neutral,
        score: 0.0,
    }
}

/// Treat the input itself as the generated title and normalize it.
pub fn title_fallback(text: &str) -> TitlePayload {
    TitlePayload {
        title: normalize::normalize_title(text),
    }
}

/// First hundred words of the input, with an ellipsis marker when truncated.
pub fn summary_fallback(text: &str) -> SummaryPayload {
    let mut summary = normalize::leading_words(text, SUMMARY_FALLBACK_WORDS);
    if normalize::word_count(text) > SUMMARY_FALLBACK_WORDS {
        summary.push_str(ELLIPSIS);
    }
    SummaryPayload { summary }
}

pub fn embedding_fallback() -> EmbeddingPayload {
    EmbeddingPayload {
        embedding: vec![0.0; EMBEDDING_DIM],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_fallback_is_neutral_zero() {
        let payload = sentiment_fallback();
        assert_eq!(payload.label, SentimentLabel::Neutral);
        assert_eq!(payload.score, 0.0);
    }

    #[test]
    fn title_fallback_normalizes_input() {
        let payload = title_fallback("  breaking   news today!! ");
        assert_eq!(payload.title, "Breaking news today");
    }

    #[test]
    fn summary_fallback_truncates_long_input() {
        let words: Vec<String> = (0..150).map(|i| format!("w{}", i)).collect();
        let input = words.join(" ");
        let payload = summary_fallback(&input);
        let expected = format!("{}{}", words[..100].join(" "), ELLIPSIS);
        assert_eq!(payload.summary, expected);
    }

    #[test]
    fn summary_fallback_keeps_short_input() {
        let payload = summary_fallback("just a few words here");
        assert_eq!(payload.summary, "just a few words here");
        assert!(!payload.summary.ends_with(ELLIPSIS));
    }

    #[test]
    fn embedding_fallback_has_fixed_dimension() {
        let payload = embedding_fallback();
        assert_eq!(payload.embedding.len(), EMBEDDING_DIM);
        assert!(payload.embedding.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn fallbacks_match_success_shapes() {
        let success = serde_json::to_value(SentimentPayload {
            label: SentimentLabel::Positive,
            score: 0.9,
        })
        .unwrap();
        let degraded = serde_json::to_value(sentiment_fallback()).unwrap();
        let keys = |v: &serde_json::Value| {
            v.as_object().unwrap().keys().cloned().collect::<Vec<_>>()
        };
        assert_eq!(keys(&success), keys(&degraded));

        let success = serde_json::to_value(EmbeddingPayload {
            embedding: vec![0.5; EMBEDDING_DIM],
        })
        .unwrap();
        let degraded = serde_json::to_value(embedding_fallback()).unwrap();
        assert_eq!(keys(&success), keys(&degraded));
    }
}
