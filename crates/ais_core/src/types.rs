use serde::{Deserialize, Serialize};

/// Incoming body for every task endpoint. Immutable once deserialized.
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceRequest {
    pub text: String,
    #[serde(default)]
    pub callback_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentPayload {
    pub label: SentimentLabel,
    pub score: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitlePayload {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryPayload {
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingPayload {
    pub embedding: Vec<f32>,
}

/// Final result for any task. Untagged so the wire shape is always the
/// inner payload itself, for success and fallback alike.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TaskPayload {
    Sentiment(SentimentPayload),
    Title(TitlePayload),
    Summary(SummaryPayload),
    Embedding(EmbeddingPayload),
}

/// Returned immediately when a callback URL defers the real work.
#[derive(Debug, Clone, Serialize)]
pub struct Acknowledgment {
    pub status: &'static str,
    pub message: &'static str,
}

impl Acknowledgment {
    pub fn processing(message: &'static str) -> Self {
        Self {
            status: "processing",
            message,
        }
    }
}
