use std::fmt;
use std::sync::Arc;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use ais_core::{
    Error, InferencePipeline, Result, SentimentLabel, SentimentPayload, SummaryParams,
};

const DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

#[derive(Serialize)]
struct EmbeddingRequest {
    input: String,
    model: String,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// OpenAI-style HTTP backend. Generation requests pin temperature to 0.0 so
/// repeated calls over the same input produce the same output.
pub struct RemotePipeline {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
}

impl RemotePipeline {
    pub fn new(base_url: Option<String>, api_key: Option<String>) -> Result<Self> {
        let client = Arc::new(Client::new());
        Ok(Self {
            client,
            api_key: api_key.unwrap_or_default(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    async fn chat(&self, prompt: String) -> Result<String> {
        let request = ChatRequest {
            model: "default".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            temperature: 0.0,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?
            .json::<ChatResponse>()
            .await?;

        response
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| Error::Inference("Chat response contained no choices".to_string()))
    }
}

impl fmt::Debug for RemotePipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemotePipeline")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait::async_trait]
impl InferencePipeline for RemotePipeline {
    fn name(&self) -> &str {
        "Remote"
    }

    async fn analyze_sentiment(&self, text: &str) -> Result<SentimentPayload> {
        let prompt = format!(
            "Classify the sentiment of the following text. Answer with exactly one word, \
             NEGATIVE, NEUTRAL or POSITIVE:\n\n{}",
            text
        );
        let answer = self.chat(prompt).await?;
        let label = match answer.to_uppercase().as_str() {
            "NEGATIVE" => SentimentLabel::Negative,
            "NEUTRAL" => SentimentLabel::Neutral,
            "POSITIVE" => SentimentLabel::Positive,
            other => {
                return Err(Error::Inference(format!(
                    "Unrecognized sentiment label: {}",
                    other
                )))
            }
        };
        Ok(SentimentPayload { label, score: 1.0 })
    }

    async fn generate_title(&self, text: &str) -> Result<String> {
        let prompt = format!(
            "Write a short title for the following text. Answer with the title only:\n\n{}",
            text
        );
        self.chat(prompt).await
    }

    async fn summarize(&self, text: &str, params: SummaryParams) -> Result<String> {
        let prompt = format!(
            "Summarize the following text in {} to {} words. Answer with the summary only:\n\n{}",
            params.min_length, params.max_length, text
        );
        self.chat(prompt).await
    }

    async fn generate_embedding(&self, text: &str) -> Result<Vec<f32>> {
        let request = EmbeddingRequest {
            input: text.to_string(),
            model: "default-embedding".to_string(),
        };

        let response = self
            .client
            .post(format!("{}/embeddings", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?
            .json::<EmbeddingResponse>()
            .await?;

        response
            .data
            .first()
            .map(|data| data.embedding.clone())
            .ok_or_else(|| Error::Inference("Embedding response contained no data".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_key() {
        let pipeline = RemotePipeline::new(None, Some("secret".to_string())).unwrap();
        let debug = format!("{:?}", pipeline);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("secret"));
    }

    #[tokio::test]
    async fn unreachable_backend_reports_inference_error() {
        // Port 9 is the discard service, nothing listens on it in tests.
        let pipeline =
            RemotePipeline::new(Some("http://127.0.0.1:9/v1".to_string()), None).unwrap();
        assert!(pipeline.generate_title("some text").await.is_err());
    }
}
