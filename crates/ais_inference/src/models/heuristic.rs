use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use ais_core::normalize;
use ais_core::{
    InferencePipeline, Result, SentimentLabel, SentimentPayload, SummaryParams, EMBEDDING_DIM,
};

const POSITIVE_CUES: [&str; 12] = [
    "good", "great", "excellent", "love", "happy", "wonderful", "amazing", "best", "enjoy",
    "fantastic", "nice", "awesome",
];

const NEGATIVE_CUES: [&str; 12] = [
    "bad", "terrible", "awful", "hate", "sad", "horrible", "worst", "angry", "poor", "broken",
    "disappointing", "ugly",
];

/// Local deterministic backend. No network, no weights, never fails; the
/// default registry entry and the baseline the tests run against.
pub struct HeuristicPipeline;

impl HeuristicPipeline {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeuristicPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HeuristicPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeuristicPipeline").finish()
    }
}

fn cue_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|t| !t.is_empty())
}

#[async_trait::async_trait]
impl InferencePipeline for HeuristicPipeline {
    fn name(&self) -> &str {
        "Heuristic"
    }

    async fn analyze_sentiment(&self, text: &str) -> Result<SentimentPayload> {
        let mut positive = 0usize;
        let mut negative = 0usize;
        for token in cue_tokens(text) {
            if POSITIVE_CUES.contains(&token.as_str()) {
                positive += 1;
            } else if NEGATIVE_CUES.contains(&token.as_str()) {
                negative += 1;
            }
        }

        let total = positive + negative;
        let (label, score) = if total == 0 || positive == negative {
            (SentimentLabel::Neutral, 0.5)
        } else if positive > negative {
            (SentimentLabel::Positive, positive as f32 / total as f32)
        } else {
            (SentimentLabel::Negative, negative as f32 / total as f32)
        };

        Ok(SentimentPayload { label, score })
    }

    async fn generate_title(&self, text: &str) -> Result<String> {
        // First sentence, or the leading words when there is none.
        let first_sentence = text
            .split_inclusive(['.', '!', '?'])
            .map(|s| s.trim())
            .find(|s| !s.is_empty());
        match first_sentence {
            Some(sentence) => Ok(sentence.to_string()),
            None => Ok(normalize::leading_words(text, normalize::MAX_TITLE_WORDS)),
        }
    }

    async fn summarize(&self, text: &str, params: SummaryParams) -> Result<String> {
        Ok(normalize::leading_words(text, params.max_length))
    }

    async fn generate_embedding(&self, text: &str) -> Result<Vec<f32>> {
        let mut embedding = vec![0.0f32; EMBEDDING_DIM];
        let mut tokens = 0usize;
        for token in cue_tokens(text) {
            let mut hasher = DefaultHasher::new();
            token.hash(&mut hasher);
            embedding[(hasher.finish() % EMBEDDING_DIM as u64) as usize] += 1.0;
            tokens += 1;
        }
        if tokens > 0 {
            for value in &mut embedding {
                *value /= tokens as f32;
            }
        }
        Ok(embedding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sentiment_detects_positive_text() {
        let pipeline = HeuristicPipeline::new();
        let result = pipeline
            .analyze_sentiment("What a great and wonderful day, I love it")
            .await
            .unwrap();
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!(result.score > 0.0 && result.score <= 1.0);
    }

    #[tokio::test]
    async fn sentiment_detects_negative_text() {
        let pipeline = HeuristicPipeline::new();
        let result = pipeline
            .analyze_sentiment("This is terrible, the worst, I hate it")
            .await
            .unwrap();
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[tokio::test]
    async fn sentiment_without_cues_is_neutral() {
        let pipeline = HeuristicPipeline::new();
        let result = pipeline.analyze_sentiment("the sky contains clouds").await.unwrap();
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert!((0.0..=1.0).contains(&result.score));
    }

    #[tokio::test]
    async fn title_takes_first_sentence() {
        let pipeline = HeuristicPipeline::new();
        let title = pipeline
            .generate_title("Rust ships a release. More text follows here.")
            .await
            .unwrap();
        assert_eq!(title, "Rust ships a release.");
    }

    #[tokio::test]
    async fn summary_honors_max_length() {
        let pipeline = HeuristicPipeline::new();
        let input = (0..200).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ");
        let params = SummaryParams::for_input_words(200);
        let summary = pipeline.summarize(&input, params).await.unwrap();
        assert_eq!(summary.split_whitespace().count(), params.max_length);
    }

    #[tokio::test]
    async fn embedding_is_deterministic_and_fixed_size() {
        let pipeline = HeuristicPipeline::new();
        let a = pipeline.generate_embedding("some input text").await.unwrap();
        let b = pipeline.generate_embedding("some input text").await.unwrap();
        let c = pipeline.generate_embedding("entirely different words").await.unwrap();
        assert_eq!(a.len(), EMBEDDING_DIM);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
