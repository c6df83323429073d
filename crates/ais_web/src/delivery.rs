//! Best-effort callback delivery: one POST, bounded timeout, no retry.
//! Failures are logged and dropped; the original caller already holds its
//! acknowledgment by the time an attempt is made.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{info, warn};
use url::Url;
use uuid::Uuid;

use ais_core::TaskPayload;

const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Transient record of a single attempt. Created at dispatch, logged,
/// discarded; there is no queue and no persistence behind it.
#[derive(Debug, Clone)]
pub struct DeliveryOutcome {
    pub id: Uuid,
    pub target: String,
    pub success: bool,
    pub detail: String,
    pub attempted_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct CallbackDelivery {
    client: Client,
}

impl CallbackDelivery {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Make the single delivery attempt and log its outcome. An unparsable
    /// target counts as a failed delivery without issuing a request.
    pub async fn deliver(&self, target: &str, payload: &TaskPayload) -> DeliveryOutcome {
        let id = Uuid::new_v4();
        let (success, detail) = match Url::parse(target) {
            Err(e) => (false, format!("invalid callback URL: {}", e)),
            Ok(url) => match self
                .client
                .post(url)
                .timeout(DELIVERY_TIMEOUT)
                .json(payload)
                .send()
                .await
            {
                Ok(response) if response.status().is_success() => {
                    (true, format!("HTTP {}", response.status()))
                }
                Ok(response) => (false, format!("HTTP {}", response.status())),
                Err(e) => (false, e.to_string()),
            },
        };

        if success {
            info!("📬 Delivered callback {} to {} ({})", id, target, detail);
        } else {
            warn!("⚠️ Callback delivery {} to {} failed: {}", id, target, detail);
        }

        DeliveryOutcome {
            id,
            target: target.to_string(),
            success,
            detail,
            attempted_at: Utc::now(),
        }
    }
}

impl Default for CallbackDelivery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ais_core::{TaskPayload, TitlePayload};

    fn payload() -> TaskPayload {
        TaskPayload::Title(TitlePayload {
            title: "Hello".to_string(),
        })
    }

    #[tokio::test]
    async fn invalid_url_fails_without_a_request() {
        let delivery = CallbackDelivery::new();
        let outcome = delivery.deliver("not a url", &payload()).await;
        assert!(!outcome.success);
        assert!(outcome.detail.contains("invalid callback URL"));
    }

    #[tokio::test]
    async fn unreachable_target_is_a_logged_failure() {
        let delivery = CallbackDelivery::new();
        let outcome = delivery.deliver("http://127.0.0.1:9/cb", &payload()).await;
        assert!(!outcome.success);
        assert_eq!(outcome.target, "http://127.0.0.1:9/cb");
    }
}
